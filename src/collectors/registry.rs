use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, warn};

use crate::collectors::assembly::{AssemblyCollector, BinaryAssembly};
use crate::collectors::collector::Collector;
use crate::collectors::exception::ExceptionCollector;
use crate::collectors::failures::{CollectionSummary, CollectorFailure};
use crate::collectors::system::{MemoryCollector, OsCollector, SysinfoProvider};
use crate::exception::ExceptionInfo;
use crate::report::{Report, StructuredWriter, TreeWriter};

/// Ordered set of collectors run for every exception event.
///
/// Collectors run one at a time, in registration order, against the same
/// writer. Section order in the report follows registration order.
#[derive(Default)]
pub struct CollectorRegistry {
    collectors: Vec<Box<dyn Collector>>,
}

impl CollectorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in collector set: exception, the running
    /// binary, operating system and memory
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ExceptionCollector::new());
        registry.register(AssemblyCollector::new(BinaryAssembly::current()));
        registry.register(OsCollector::new(SysinfoProvider::new()));
        registry.register(MemoryCollector::new(SysinfoProvider::new()));
        registry
    }

    pub fn register<C: Collector + 'static>(&mut self, collector: C) -> &mut Self {
        self.register_boxed(Box::new(collector))
    }

    pub fn register_boxed(&mut self, collector: Box<dyn Collector>) -> &mut Self {
        debug!("Registering collector: {}", collector.name());
        self.collectors.push(collector);
        self
    }

    /// Remove the first collector with the given name
    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn Collector>> {
        let index = self.collectors.iter().position(|c| c.name() == name)?;
        debug!("Unregistering collector: {}", name);
        Some(self.collectors.remove(index))
    }

    pub fn clear(&mut self) {
        self.collectors.clear();
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Collector names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.collectors.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Collector> {
        self.collectors.iter().map(|c| c.as_ref())
    }

    /// Run every collector against `writer`.
    ///
    /// Never fails. A collector that returns an error or panics is recorded
    /// in the summary, any scope it left open is closed, and the pass
    /// continues with the next collector. Each collector sees the writer
    /// through a [`TrackedWriter`], so it cannot close scopes it did not
    /// open, whatever the backend's own bookkeeping.
    pub fn collect(
        &self,
        exception: &ExceptionInfo,
        writer: &mut dyn StructuredWriter,
    ) -> CollectionSummary {
        info!(
            "Collecting crash report with {} collector(s)",
            self.collectors.len()
        );

        let mut summary = CollectionSummary::new();

        for collector in &self.collectors {
            let name = collector.name();
            debug!("Running collector: {}", name);

            let mut tracked = TrackedWriter::new(&mut *writer);
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                collector.process(exception, &mut tracked)
            }));
            let unclosed_scopes = tracked.close_remaining();
            let rejected_ends = tracked.rejected_ends;

            let (reason, panicked) = match outcome {
                Ok(Ok(())) if unclosed_scopes == 0 && rejected_ends == 0 => {
                    summary.record_success(name);
                    continue;
                }
                Ok(Ok(())) if rejected_ends > 0 => (
                    format!("closed {} scope(s) it did not open", rejected_ends),
                    false,
                ),
                Ok(Ok(())) => (
                    format!("left {} scope(s) open", unclosed_scopes),
                    false,
                ),
                Ok(Err(e)) => (format!("{:#}", e), false),
                Err(payload) => (ExceptionInfo::from_panic(&*payload).message, true),
            };

            warn!("Collector '{}' failed: {}", name, reason);
            summary.record_failure(CollectorFailure {
                collector: name.to_string(),
                reason,
                panicked,
                unclosed_scopes,
                rejected_ends,
            });
        }

        info!(
            "Collection finished: {} succeeded, {} failed",
            summary.succeeded.len(),
            summary.failure_count()
        );
        summary
    }

    /// Build a fresh report for one exception event
    pub fn build_report(&self, exception: &ExceptionInfo) -> (Report, CollectionSummary) {
        let mut writer = TreeWriter::new();
        let summary = self.collect(exception, &mut writer);
        summary.log_failures();
        (writer.into_report(), summary)
    }
}

impl fmt::Debug for CollectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorRegistry")
            .field("collectors", &self.names())
            .finish()
    }
}

/// Writer view handed to a single collector.
///
/// Keeps its own stack of the scopes the collector opened. `end_object` only
/// ever closes one of those; a surplus call is dropped and counted.
struct TrackedWriter<'a> {
    inner: &'a mut dyn StructuredWriter,
    open: Vec<String>,
    rejected_ends: usize,
}

impl<'a> TrackedWriter<'a> {
    fn new(inner: &'a mut dyn StructuredWriter) -> Self {
        Self {
            inner,
            open: Vec::new(),
            rejected_ends: 0,
        }
    }

    /// Close every scope the collector left open, innermost first
    fn close_remaining(&mut self) -> usize {
        let count = self.open.len();
        while let Some(name) = self.open.pop() {
            debug!("Force-closing scope '{}'", name);
            self.inner.end_object(&name);
        }
        count
    }
}

impl StructuredWriter for TrackedWriter<'_> {
    fn begin_object(&mut self, name: &str) {
        self.open.push(name.to_string());
        self.inner.begin_object(name);
    }

    fn write_value(&mut self, key: &str, value: &str) {
        self.inner.write_value(key, value);
    }

    fn end_object(&mut self, name: &str) {
        match self.open.pop() {
            Some(open) => {
                if open != name {
                    debug!("end_object('{}') closes open scope '{}'", name, open);
                }
                self.inner.end_object(&open);
            }
            None => {
                warn!("Ignoring end_object('{}') with no scope open in this section", name);
                self.rejected_ends += 1;
            }
        }
    }
}
