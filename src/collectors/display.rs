//! Primary display collector.

use anyhow::{anyhow, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::collectors::collector::Collector;
use crate::constants::{FIELD_DPI_X, FIELD_DPI_Y, FIELD_HEIGHT, FIELD_WIDTH, SECTION_DISPLAY};
use crate::exception::ExceptionInfo;
use crate::report::{ObjectScope, StructuredWriter};

/// Pixel size of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// Resolved display density.
///
/// `Unknown` marks a density that could not be queried and is distinct
/// from a real reading of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dpi {
    Unknown,
    Known { x: f32, y: f32 },
}

impl Dpi {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Dpi::Unknown)
    }
}

/// Source of display facts
#[cfg_attr(test, mockall::automock)]
pub trait DisplayProvider: Send + Sync {
    fn primary_screen_size(&self) -> Result<ScreenSize>;

    /// Horizontal and vertical density of the primary screen
    fn dpi(&self) -> Result<(f32, f32)>;
}

/// Display facts fixed at construction, typically from configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDisplayProvider {
    size: Option<ScreenSize>,
    dpi: Option<(f32, f32)>,
}

impl StaticDisplayProvider {
    pub fn new(size: Option<ScreenSize>, dpi: Option<(f32, f32)>) -> Self {
        Self { size, dpi }
    }

    /// No display attached
    pub fn headless() -> Self {
        Self::default()
    }
}

impl DisplayProvider for StaticDisplayProvider {
    fn primary_screen_size(&self) -> Result<ScreenSize> {
        self.size.ok_or_else(|| anyhow!("no primary display"))
    }

    fn dpi(&self) -> Result<(f32, f32)> {
        self.dpi.ok_or_else(|| anyhow!("display density unavailable"))
    }
}

/// Writes the primary screen's size and, when available, its density
pub struct DisplayCollector<P: DisplayProvider> {
    provider: P,
}

impl<P: DisplayProvider> DisplayCollector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Query the density, mapping any failure to [`Dpi::Unknown`]
    fn resolve_dpi(&self) -> Dpi {
        match self.provider.dpi() {
            Ok((x, y)) => Dpi::Known { x, y },
            Err(e) => {
                debug!("Display density unavailable: {:#}", e);
                Dpi::Unknown
            }
        }
    }
}

impl<P: DisplayProvider> Collector for DisplayCollector<P> {
    fn name(&self) -> &str {
        SECTION_DISPLAY
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        // Without a screen size there is no section at all
        let size = self.provider.primary_screen_size()?;

        let mut scope = ObjectScope::open(writer, SECTION_DISPLAY);
        scope.write_display(FIELD_WIDTH, size.width);
        scope.write_display(FIELD_HEIGHT, size.height);

        if let Dpi::Known { x, y } = self.resolve_dpi() {
            scope.write_display(FIELD_DPI_X, x);
            scope.write_display(FIELD_DPI_Y, y);
        }

        Ok(())
    }
}
