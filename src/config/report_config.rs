use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::collectors::{
    AssemblyCollector, BinaryAssembly, CollectorRegistry, DisplayCollector, ExceptionCollector,
    MemoryCollector, OsCollector, ScreenSize, StaticDisplayProvider, SysinfoProvider,
};

/// One collector entry in the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollectorSpec {
    Exception,
    /// The running executable; `name` overrides the section name
    Assembly {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Fixed display facts for hosts that know their screen
    Display {
        width: u32,
        height: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dpi_x: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dpi_y: Option<f32>,
    },
    Os,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub version: String,
    pub description: String,
    /// Collectors in report section order
    pub collectors: Vec<CollectorSpec>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            description: "Default crash report collectors".to_string(),
            collectors: vec![
                CollectorSpec::Exception,
                CollectorSpec::Assembly { name: None },
                CollectorSpec::Os,
                CollectorSpec::Memory,
            ],
        }
    }
}

impl ReportConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ReportConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check entries that deserialize cleanly but cannot be honored
    pub fn validate(&self) -> Result<()> {
        for spec in &self.collectors {
            if let CollectorSpec::Display { dpi_x, dpi_y, .. } = spec {
                if dpi_x.is_some() != dpi_y.is_some() {
                    bail!("display entry must set both dpi_x and dpi_y, or neither");
                }
            }
        }
        Ok(())
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Create a default configuration YAML file
    pub fn create_default_config_file(path: &Path) -> Result<()> {
        Self::default().save_to_yaml_file(path)
    }

    /// Build a registry holding the configured collectors, in order
    pub fn build_registry(&self) -> CollectorRegistry {
        let mut registry = CollectorRegistry::new();

        for spec in &self.collectors {
            match spec {
                CollectorSpec::Exception => {
                    registry.register(ExceptionCollector::new());
                }
                CollectorSpec::Assembly { name: Some(name) } => {
                    registry.register(AssemblyCollector::with_name(
                        BinaryAssembly::current(),
                        name.clone(),
                    ));
                }
                CollectorSpec::Assembly { name: None } => {
                    registry.register(AssemblyCollector::new(BinaryAssembly::current()));
                }
                CollectorSpec::Display {
                    width,
                    height,
                    dpi_x,
                    dpi_y,
                } => {
                    let size = ScreenSize {
                        width: *width,
                        height: *height,
                    };
                    let dpi = (*dpi_x).zip(*dpi_y);
                    if dpi.is_none() && (dpi_x.is_some() || dpi_y.is_some()) {
                        warn!("Display entry sets only one of dpi_x/dpi_y; density will be omitted");
                    }
                    registry.register(DisplayCollector::new(StaticDisplayProvider::new(
                        Some(size),
                        dpi,
                    )));
                }
                CollectorSpec::Os => {
                    registry.register(OsCollector::new(SysinfoProvider::new()));
                }
                CollectorSpec::Memory => {
                    registry.register(MemoryCollector::new(SysinfoProvider::new()));
                }
            }
        }

        debug!("Built registry: {:?}", registry);
        registry
    }
}

/// Load a configuration file or create a default one.
///
/// Loads from `config_path` when it exists. A missing file is created with
/// the default configuration. Without a path the defaults are used as-is.
pub fn load_or_create_config(config_path: Option<&Path>) -> Result<ReportConfig> {
    match config_path {
        Some(path) if path.exists() => ReportConfig::from_yaml_file(path),
        Some(path) => {
            info!("Creating default config at {}", path.display());
            let config = ReportConfig::default();
            config.save_to_yaml_file(path)?;
            Ok(config)
        }
        None => {
            info!("No configuration specified, using defaults");
            Ok(ReportConfig::default())
        }
    }
}
