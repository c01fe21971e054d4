use anyhow::Result;

use crate::exception::ExceptionInfo;
use crate::report::StructuredWriter;

/// A unit that gathers one category of diagnostic facts into the report.
///
/// Each call to `process` writes one named section through an
/// [`ObjectScope`](crate::report::ObjectScope). Facts that cannot be
/// determined are omitted from the section. Returning `Err` (or panicking)
/// is a collector-level failure: the registry records it and moves on to
/// the next collector.
///
/// Collectors hold only constructor-supplied state and may be invoked any
/// number of times.
pub trait Collector: Send + Sync {
    /// Name used for logging, failure records and `unregister`
    fn name(&self) -> &str;

    /// Write this collector's section for the given exception
    fn process(&self, exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()>;
}
