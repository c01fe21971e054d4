//! # crash_collector
//!
//! The diagnostic-collection core of a crash-reporting client.
//!
//! ## Overview
//!
//! When an unhandled error or panic reaches the top of an application, a set
//! of independent collectors each gather one slice of environment or
//! application state and write it as a named section of a single report.
//! A failing collector never aborts the pass or corrupts other sections:
//! the registry isolates it, closes any scope it left open and moves on.
//!
//! ## Usage
//!
//! ```no_run
//! use crash_collector::collectors::{CollectorRegistry, DisplayCollector, StaticDisplayProvider};
//! use crash_collector::handler::report_error;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut registry = CollectorRegistry::with_defaults();
//! registry.register(DisplayCollector::new(StaticDisplayProvider::headless()));
//!
//! let error = anyhow::anyhow!("database connection lost");
//! let (report, summary) = report_error(&registry, &error);
//!
//! println!("{}", report.to_json_pretty()?);
//! println!("{} collector(s) failed", summary.failure_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`report`]: the structured writer contract, scope guards and report tree
//! - [`collectors`]: the collector trait, the registry and the built-in collectors
//! - [`exception`]: the read-only description of the triggering failure
//! - [`handler`]: entry points for errors and panics
//! - [`config`]: YAML configuration of the collector set
//! - [`cli`]: command-line interface of the `crash-report` binary
//! - [`constants`]: section names and field keys

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Collectors and the registry that runs them
pub mod collectors;

/// Configuration management for the collector set
pub mod config;

/// Section names, field keys and other fixed values
pub mod constants;

/// Description of the failure that triggered a report
pub mod exception;

/// Entry points for captured errors and panics
pub mod handler;

/// Structured writer contract and the in-memory report tree
pub mod report;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
