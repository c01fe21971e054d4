//! Operating system and memory collectors
//!
//! Facts come from a [`SystemProvider`]. The default provider uses the
//! sysinfo crate; tests substitute scripted providers.

mod collector;
pub mod models;
mod provider;

pub use collector::{MemoryCollector, OsCollector};
pub use models::{MemoryInfo, OsInfo};
pub use provider::{SysinfoProvider, SystemProvider};
