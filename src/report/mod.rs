//! Structured report construction.
//!
//! Collectors write into a [`StructuredWriter`] through [`ObjectScope`]
//! guards. [`TreeWriter`] is the in-memory backend that turns those calls
//! into a [`Report`] for one exception event.

mod scope;
mod tree;
mod writer;

pub use scope::ObjectScope;
pub use tree::{Entry, Report, ReportObject, TreeWriter};
pub use writer::{FieldOutcome, StructuredWriter};
