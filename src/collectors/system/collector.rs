use anyhow::Result;

use crate::collectors::collector::Collector;
use crate::collectors::system::provider::SystemProvider;
use crate::constants::*;
use crate::exception::ExceptionInfo;
use crate::report::{FieldOutcome, ObjectScope, StructuredWriter};

/// Writes operating system identity and processor count
pub struct OsCollector<P: SystemProvider> {
    provider: P,
}

impl<P: SystemProvider> OsCollector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: SystemProvider> Collector for OsCollector<P> {
    fn name(&self) -> &str {
        SECTION_OS
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, SECTION_OS);

        if let Some(os) = FieldOutcome::from_result(SECTION_OS, self.provider.os_info()).value() {
            scope.write_optional(FIELD_OS_NAME, os.name.as_deref());
            scope.write_optional(FIELD_OS_VERSION, os.version.as_deref());
            scope.write_optional(FIELD_KERNEL_VERSION, os.kernel_version.as_deref());
            scope.write_optional(FIELD_HOST_NAME, os.host_name.as_deref());
        }

        scope.write_value(FIELD_ARCHITECTURE, std::env::consts::ARCH);
        scope.write_field(
            FIELD_PROCESSOR_COUNT,
            FieldOutcome::from_result(FIELD_PROCESSOR_COUNT, self.provider.processor_count()),
        );

        Ok(())
    }
}

/// Writes physical and swap memory usage in bytes
pub struct MemoryCollector<P: SystemProvider> {
    provider: P,
}

impl<P: SystemProvider> MemoryCollector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: SystemProvider> Collector for MemoryCollector<P> {
    fn name(&self) -> &str {
        SECTION_MEMORY
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, SECTION_MEMORY);

        let memory = FieldOutcome::from_result(SECTION_MEMORY, self.provider.memory_info());
        if let FieldOutcome::Value(memory) = memory {
            scope.write_display(FIELD_TOTAL_PHYSICAL, memory.total_memory);
            scope.write_display(FIELD_USED_PHYSICAL, memory.used_memory);
            scope.write_display(FIELD_AVAILABLE_PHYSICAL, memory.available_memory);
            scope.write_display(FIELD_TOTAL_SWAP, memory.total_swap);
            scope.write_display(FIELD_USED_SWAP, memory.used_swap);
        }

        Ok(())
    }
}
