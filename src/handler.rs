//! Entry points for code that observes a failure and wants a report.

use std::panic::{self, UnwindSafe};

use log::error;

use crate::collectors::{CollectionSummary, CollectorRegistry};
use crate::exception::ExceptionInfo;
use crate::report::Report;

/// Report produced for one captured failure
pub type CapturedReport = (Report, CollectionSummary);

/// Build a report for an error that reached the top of the application
pub fn report_error(registry: &CollectorRegistry, error: &anyhow::Error) -> CapturedReport {
    error!("Capturing crash report: {:#}", error);
    registry.build_report(&ExceptionInfo::from_anyhow(error))
}

/// Run `f`, turning a panic into a crash report.
///
/// Returns `f`'s value when it completes normally.
pub fn capture_panic<T, F>(registry: &CollectorRegistry, f: F) -> Result<T, CapturedReport>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| {
        let exception = ExceptionInfo::from_panic(&*payload);
        error!("Capturing crash report for panic: {}", exception.message);
        registry.build_report(&exception)
    })
}
