//! Assembly (binary module) metadata collector.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::collectors::collector::Collector;
use crate::constants::{
    FIELD_DYNAMIC, FIELD_FILE_VERSION, FIELD_FULL_NAME, FIELD_FULL_TRUST, FIELD_GAC,
    SECTION_ASSEMBLY_FALLBACK, SHARED_INSTALL_PREFIXES,
};
use crate::exception::ExceptionInfo;
use crate::report::{FieldOutcome, ObjectScope, StructuredWriter};

/// Metadata source for one loaded module
#[cfg_attr(test, mockall::automock)]
pub trait AssemblyHandle: Send + Sync {
    /// Identity string, e.g. `app, Version=1.2.0`
    fn full_name(&self) -> Result<String>;

    /// Loaded from the shared system install location
    fn in_global_cache(&self) -> Result<bool>;

    fn fully_trusted(&self) -> Result<bool>;

    /// Generated at runtime with no backing file
    fn is_dynamic(&self) -> Result<bool>;

    fn file_version(&self) -> Result<String>;
}

/// The native executable this process was started from
#[derive(Debug, Clone)]
pub struct BinaryAssembly {
    name: String,
    version: String,
    location: Option<PathBuf>,
}

impl BinaryAssembly {
    pub fn new(name: impl Into<String>, version: impl Into<String>, location: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            location,
        }
    }

    /// Describe the running executable
    pub fn current() -> Self {
        let location = match std::env::current_exe() {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("Could not resolve current executable: {}", e);
                None
            }
        };
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), location)
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }
}

impl AssemblyHandle for BinaryAssembly {
    fn full_name(&self) -> Result<String> {
        if self.name.is_empty() {
            return Err(anyhow!("assembly has no name"));
        }
        Ok(format!("{}, Version={}", self.name, self.version))
    }

    fn in_global_cache(&self) -> Result<bool> {
        Ok(self.location.as_deref().map_or(false, |path| {
            SHARED_INSTALL_PREFIXES
                .iter()
                .any(|prefix| path.starts_with(prefix))
        }))
    }

    fn fully_trusted(&self) -> Result<bool> {
        // Native code runs with the full rights of the process
        Ok(true)
    }

    fn is_dynamic(&self) -> Result<bool> {
        Ok(self.location.is_none())
    }

    /// Version the backing file was built as.
    ///
    /// Native executables carry no version resource, so this is the version
    /// recorded for the handle (the package version for [`current`]). It is
    /// only reported while the backing file is still a readable regular file;
    /// a deleted or replaced binary yields no `fileVersion`.
    ///
    /// [`current`]: BinaryAssembly::current
    fn file_version(&self) -> Result<String> {
        let location = self
            .location
            .as_deref()
            .ok_or_else(|| anyhow!("assembly has no backing file"))?;
        let metadata = fs::metadata(location)
            .with_context(|| format!("Failed to read metadata for {}", location.display()))?;
        if !metadata.is_file() {
            return Err(anyhow!("{} is not a regular file", location.display()));
        }
        Ok(self.version.clone())
    }
}

/// Writes identity and trust facts for one assembly.
///
/// The section is named by the explicit override when given, otherwise by
/// the simple name of the assembly (the part of `fullName` before the
/// first comma), falling back to `"assembly"`.
pub struct AssemblyCollector<H: AssemblyHandle> {
    handle: H,
    name: String,
}

impl<H: AssemblyHandle> AssemblyCollector<H> {
    pub fn new(handle: H) -> Self {
        let name = default_section_name(&handle);
        Self { handle, name }
    }

    pub fn with_name(handle: H, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
        }
    }
}

fn default_section_name<H: AssemblyHandle>(handle: &H) -> String {
    handle
        .full_name()
        .ok()
        .and_then(|full| {
            let simple = full.split(',').next().unwrap_or_default().trim().to_string();
            (!simple.is_empty()).then_some(simple)
        })
        .unwrap_or_else(|| SECTION_ASSEMBLY_FALLBACK.to_string())
}

impl<H: AssemblyHandle> Collector for AssemblyCollector<H> {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, &self.name);

        scope.write_value(FIELD_FULL_NAME, &self.handle.full_name()?);
        scope.write_bool(FIELD_GAC, self.handle.in_global_cache()?);
        scope.write_bool(FIELD_FULL_TRUST, self.handle.fully_trusted()?);
        scope.write_bool(FIELD_DYNAMIC, self.handle.is_dynamic()?);

        scope.write_field(
            FIELD_FILE_VERSION,
            FieldOutcome::from_result(FIELD_FILE_VERSION, self.handle.file_version()),
        );

        Ok(())
    }
}
