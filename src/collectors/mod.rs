//! Diagnostic collectors and the registry that runs them.
//!
//! Each collector gathers one category of facts about the failing process
//! and writes it as one named section of the report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          CollectorRegistry              │
//! │   (ordered, fault-isolated dispatch)    │
//! ├─────────────────────────────────────────┤
//! │             Collectors                  │
//! │  ┌──────────┬──────────┬──────────┐     │
//! │  │Exception │ Assembly │ Display  │     │
//! │  ├──────────┼──────────┼──────────┤     │
//! │  │    OS    │  Memory  │  custom  │     │
//! │  └──────────┴──────────┴──────────┘     │
//! ├─────────────────────────────────────────┤
//! │          StructuredWriter               │
//! │   (TreeWriter → Report for transport)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use crash_collector::collectors::CollectorRegistry;
//! use crash_collector::exception::ExceptionInfo;
//!
//! let registry = CollectorRegistry::with_defaults();
//! let exception = ExceptionInfo::new("std::io::Error", "disk full");
//!
//! let (report, summary) = registry.build_report(&exception);
//! println!("{} sections, {} failures", report.sections.len(), summary.failure_count());
//! ```

/// Core collector trait
pub mod collector;

/// Ordered collector registry and collection pass
pub mod registry;

/// Failure records produced by a collection pass
pub mod failures;

/// Assembly (binary module) metadata
pub mod assembly;

/// Primary display size and density
pub mod display;

/// The triggering exception and its cause chain
pub mod exception;

/// Operating system and memory facts
pub mod system;

pub use assembly::{AssemblyCollector, AssemblyHandle, BinaryAssembly};
pub use collector::Collector;
pub use display::{DisplayCollector, DisplayProvider, Dpi, ScreenSize, StaticDisplayProvider};
pub use exception::ExceptionCollector;
pub use failures::{CollectionSummary, CollectorFailure};
pub use registry::CollectorRegistry;
pub use system::{MemoryCollector, OsCollector, SysinfoProvider, SystemProvider};
