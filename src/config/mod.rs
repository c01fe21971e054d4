// Re-export all items from the submodules
mod report_config;

pub use report_config::{load_or_create_config, CollectorSpec, ReportConfig};
