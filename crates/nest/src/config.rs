//! Nester configuration.

use crate::sheet::SheetSpec;
use cabinetry_core::{Error, Mm, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bound on sheets opened per material.
pub const DEFAULT_MAX_SHEETS: usize = 1000;

/// Configuration for [`crate::Nester`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestConfig {
    /// Stock board used for every material.
    pub sheet: SheetSpec,

    /// Upper bound on sheets opened for one material.
    pub max_sheets_per_material: usize,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            sheet: SheetSpec::default(),
            max_sheets_per_material: DEFAULT_MAX_SHEETS,
        }
    }
}

impl NestConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stock sheet.
    pub fn with_sheet(mut self, sheet: SheetSpec) -> Self {
        self.sheet = sheet;
        self
    }

    /// Sets the kerf of the stock sheet.
    pub fn with_kerf(mut self, kerf: Mm) -> Self {
        self.sheet.kerf = kerf;
        self
    }

    /// Sets the per-material sheet bound.
    pub fn with_max_sheets(mut self, max: usize) -> Self {
        self.max_sheets_per_material = max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.sheet.validate()?;
        if self.max_sheets_per_material == 0 {
            return Err(Error::ConfigError(
                "max_sheets_per_material must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
