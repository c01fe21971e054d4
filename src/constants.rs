//! Global constants for the crash collector.
//!
//! Section names and field keys are part of the report format consumed by the
//! backend, so they live here rather than inside each collector.

// Section names
pub const SECTION_EXCEPTION: &str = "exception";
pub const SECTION_DISPLAY: &str = "display";
pub const SECTION_OS: &str = "os";
pub const SECTION_MEMORY: &str = "memory";

/// Section name used by the assembly collector when no name can be derived
pub const SECTION_ASSEMBLY_FALLBACK: &str = "assembly";

/// Nested object holding one link of an exception's cause chain
pub const INNER_EXCEPTION: &str = "innerException";

// Exception fields
pub const FIELD_TYPE: &str = "type";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_STACK_TRACE: &str = "stackTrace";

// Assembly fields
pub const FIELD_FULL_NAME: &str = "fullName";
pub const FIELD_GAC: &str = "gac";
pub const FIELD_FULL_TRUST: &str = "fullTrust";
pub const FIELD_DYNAMIC: &str = "dynamic";
pub const FIELD_FILE_VERSION: &str = "fileVersion";

// Display fields
pub const FIELD_WIDTH: &str = "width";
pub const FIELD_HEIGHT: &str = "height";
pub const FIELD_DPI_X: &str = "dpiX";
pub const FIELD_DPI_Y: &str = "dpiY";

// OS fields
pub const FIELD_OS_NAME: &str = "name";
pub const FIELD_OS_VERSION: &str = "version";
pub const FIELD_KERNEL_VERSION: &str = "kernelVersion";
pub const FIELD_HOST_NAME: &str = "hostName";
pub const FIELD_ARCHITECTURE: &str = "architecture";
pub const FIELD_PROCESSOR_COUNT: &str = "processorCount";

// Memory fields (bytes)
pub const FIELD_TOTAL_PHYSICAL: &str = "totalPhysical";
pub const FIELD_USED_PHYSICAL: &str = "usedPhysical";
pub const FIELD_AVAILABLE_PHYSICAL: &str = "availablePhysical";
pub const FIELD_TOTAL_SWAP: &str = "totalSwap";
pub const FIELD_USED_SWAP: &str = "usedSwap";

/// Boolean text expected by report consumers
pub const BOOL_TRUE: &str = "True";
pub const BOOL_FALSE: &str = "False";

/// Install prefixes treated as the shared (global) library cache
pub const SHARED_INSTALL_PREFIXES: &[&str] = &[
    "/usr/lib",
    "/usr/lib64",
    "/usr/local/lib",
    "/usr/bin",
    "/usr/local/bin",
    "/lib",
    "/System/Library",
    "C:\\Windows\\System32",
    "C:\\Program Files\\Common Files",
];

/// Default location of the collector configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/crash_collector.yaml";
