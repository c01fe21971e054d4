use anyhow::{anyhow, Result};
use log::debug;
use sysinfo::{System, SystemExt};

use crate::collectors::system::models::{MemoryInfo, OsInfo};

/// Source of operating system and memory facts
#[cfg_attr(test, mockall::automock)]
pub trait SystemProvider: Send + Sync {
    fn os_info(&self) -> Result<OsInfo>;

    fn memory_info(&self) -> Result<MemoryInfo>;

    fn processor_count(&self) -> Result<usize>;
}

/// [`SystemProvider`] backed by the sysinfo crate.
///
/// Each query builds its own `System` and refreshes only what it reads, so
/// the provider holds no state between reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProvider;

impl SysinfoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SystemProvider for SysinfoProvider {
    fn os_info(&self) -> Result<OsInfo> {
        debug!("Querying operating system information");
        let system = System::new();

        Ok(OsInfo {
            name: system.name(),
            version: system.os_version(),
            kernel_version: system.kernel_version(),
            host_name: system.host_name(),
        })
    }

    fn memory_info(&self) -> Result<MemoryInfo> {
        debug!("Querying memory information");
        let mut system = System::new();
        system.refresh_memory();

        let total_memory = system.total_memory();
        if total_memory == 0 {
            return Err(anyhow!("memory information unavailable"));
        }

        Ok(MemoryInfo {
            total_memory,
            used_memory: system.used_memory(),
            available_memory: system.available_memory(),
            total_swap: system.total_swap(),
            used_swap: system.used_swap(),
        })
    }

    fn processor_count(&self) -> Result<usize> {
        let mut system = System::new();
        system.refresh_cpu();

        match system.cpus().len() {
            0 => Err(anyhow!("processor information unavailable")),
            count => Ok(count),
        }
    }
}
