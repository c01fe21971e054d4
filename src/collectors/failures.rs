//! Collector failure tracking and reporting
//!
//! The registry records every collector-level failure here so callers can
//! see which sections of a report are missing or partial.

use log::warn;

/// One collector that did not complete
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorFailure {
    pub collector: String,
    pub reason: String,
    /// The collector panicked instead of returning an error
    pub panicked: bool,
    /// Scopes the registry had to close on the collector's behalf
    pub unclosed_scopes: usize,
    /// `end_object` calls dropped because the collector had no scope open
    pub rejected_ends: usize,
}

/// Outcome of one collection pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSummary {
    pub succeeded: Vec<String>,
    pub failures: Vec<CollectorFailure>,
}

impl CollectionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, collector: &str) {
        self.succeeded.push(collector.to_string());
    }

    pub fn record_failure(&mut self, failure: CollectorFailure) {
        self.failures.push(failure);
    }

    /// Number of collectors invoked
    pub fn collectors_run(&self) -> usize {
        self.succeeded.len() + self.failures.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Every collector completed without error
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_collectors(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.collector.as_str())
    }

    /// Log a summary of failed collectors
    pub fn log_failures(&self) {
        if self.failures.is_empty() {
            return;
        }

        warn!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        warn!("⚠️  Crash report collected with missing sections");
        warn!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        warn!(
            "{} of {} collector(s) failed:",
            self.failures.len(),
            self.collectors_run()
        );

        for failure in &self.failures {
            let kind = if failure.panicked { "panic" } else { "error" };
            warn!("  • {} ({}): {}", failure.collector, kind, failure.reason);
            if failure.unclosed_scopes > 0 {
                warn!(
                    "    closed {} scope(s) left open by the collector",
                    failure.unclosed_scopes
                );
            }
            if failure.rejected_ends > 0 {
                warn!(
                    "    ignored {} end_object call(s) outside the collector's section",
                    failure.rejected_ends
                );
            }
        }

        warn!("Note: the report still contains every section that was collected.");
        warn!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
}
