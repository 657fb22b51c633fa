//! Project, board and auto-fill configuration.

use crate::model::{VerticalClass, SOFT_SILL_THRESHOLD};
use cabinetry_core::{Error, Mm, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board and carcass dimensions handed to the part list generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSettings {
    /// Carcass board thickness.
    pub carcass_thickness: Mm,
    /// Back panel thickness.
    pub back_thickness: Mm,
    /// Material tag for carcass parts.
    pub carcass_material: String,
    /// Material tag for back panels.
    pub back_material: String,
    /// Material tag for doors, drawer fronts and fillers.
    pub front_material: String,
    /// Carcass depth of base units.
    pub base_depth: Mm,
    /// Carcass depth of wall units.
    pub wall_depth: Mm,
    /// Carcass depth of tall units.
    pub tall_depth: Mm,
    /// Carcass height of base units (without plinth).
    pub base_height: Mm,
    /// Carcass height of wall units.
    pub wall_height: Mm,
    /// Carcass height of tall units.
    pub tall_height: Mm,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            carcass_thickness: 18,
            back_thickness: 3,
            carcass_material: "carcass-18".to_string(),
            back_material: "back-3".to_string(),
            front_material: "front-18".to_string(),
            base_depth: 560,
            wall_depth: 320,
            tall_depth: 560,
            base_height: 720,
            wall_height: 720,
            tall_height: 2100,
        }
    }
}

impl BoardSettings {
    /// Creates the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the carcass thickness.
    pub fn with_carcass_thickness(mut self, thickness: Mm) -> Self {
        self.carcass_thickness = thickness;
        self
    }

    /// Sets the carcass material tag.
    pub fn with_carcass_material(mut self, material: impl Into<String>) -> Self {
        self.carcass_material = material.into();
        self
    }

    /// Sets the front material tag.
    pub fn with_front_material(mut self, material: impl Into<String>) -> Self {
        self.front_material = material.into();
        self
    }

    /// Sets the carcass depth for one class.
    pub fn with_depth(mut self, class: VerticalClass, depth: Mm) -> Self {
        match class {
            VerticalClass::Base => self.base_depth = depth,
            VerticalClass::Wall => self.wall_depth = depth,
            VerticalClass::Tall => self.tall_depth = depth,
        }
        self
    }

    /// Carcass depth for a class.
    pub fn depth_for(&self, class: VerticalClass) -> Mm {
        match class {
            VerticalClass::Base => self.base_depth,
            VerticalClass::Wall => self.wall_depth,
            VerticalClass::Tall => self.tall_depth,
        }
    }

    /// Carcass height for a class.
    pub fn height_for(&self, class: VerticalClass) -> Mm {
        match class {
            VerticalClass::Base => self.base_height,
            VerticalClass::Wall => self.wall_height,
            VerticalClass::Tall => self.tall_height,
        }
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<()> {
        if self.carcass_thickness <= 0 || self.back_thickness <= 0 {
            return Err(Error::ConfigError(
                "board thicknesses must be positive".into(),
            ));
        }
        for class in VerticalClass::ALL {
            if self.depth_for(class) <= 0 || self.height_for(class) <= 0 {
                return Err(Error::ConfigError(format!(
                    "{:?} depth and height must be positive",
                    class
                )));
            }
        }
        for material in [
            &self.carcass_material,
            &self.back_material,
            &self.front_material,
        ] {
            if material.trim().is_empty() {
                return Err(Error::ConfigError("material tags must not be empty".into()));
            }
        }
        Ok(())
    }
}

/// Project-wide settings. Auto-fill validates and carries them; the part
/// list generator reads the board settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectSettings {
    /// Project name.
    pub name: Option<String>,
    /// Board and carcass dimensions.
    pub board: BoardSettings,
}

impl ProjectSettings {
    /// Creates the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the board settings.
    pub fn with_board(mut self, board: BoardSettings) -> Self {
        self.board = board;
        self
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<()> {
        self.board.validate()
    }
}

/// Placement constants used by auto-fill.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FillRules {
    /// Candidate unit widths, tried in order.
    pub standard_widths: Vec<Mm>,
    /// Width of an auto-placed sink.
    pub sink_width: Mm,
    /// Width of an auto-placed cooker unit.
    pub cooker_width: Mm,
    /// Grid the sink offset is rounded to.
    pub sink_grid: Mm,
    /// Preferred sink-to-cooker distance.
    pub work_triangle: Mm,
    /// Step used when probing for a free cooker position.
    pub probe_step: Mm,
    /// Narrowest gap closed with a filler panel.
    pub min_filler: Mm,
    /// Cursor advance when nothing fits.
    pub nudge: Mm,
    /// Windows with a sill at or above this are soft.
    pub soft_sill_threshold: Mm,
}

impl Default for FillRules {
    fn default() -> Self {
        Self {
            standard_widths: vec![900, 800, 600, 500, 450, 400, 300, 150],
            sink_width: 900,
            cooker_width: 900,
            sink_grid: 25,
            work_triangle: 1800,
            probe_step: 50,
            min_filler: 20,
            nudge: 25,
            soft_sill_threshold: SOFT_SILL_THRESHOLD,
        }
    }
}

impl FillRules {
    /// Creates the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate widths.
    pub fn with_standard_widths(mut self, widths: Vec<Mm>) -> Self {
        self.standard_widths = widths;
        self
    }

    /// Sets the minimum filler width.
    pub fn with_min_filler(mut self, min_filler: Mm) -> Self {
        self.min_filler = min_filler;
        self
    }

    /// Sets the work triangle distance.
    pub fn with_work_triangle(mut self, distance: Mm) -> Self {
        self.work_triangle = distance;
        self
    }

    /// Validates the rules.
    pub fn validate(&self) -> Result<()> {
        if self.standard_widths.is_empty() || self.standard_widths.iter().any(|&w| w <= 0) {
            return Err(Error::ConfigError(
                "standard widths must be a non-empty list of positive values".into(),
            ));
        }
        if self.sink_width <= 0 || self.cooker_width <= 0 {
            return Err(Error::ConfigError(
                "sink and cooker widths must be positive".into(),
            ));
        }
        if self.probe_step <= 0 || self.nudge <= 0 {
            return Err(Error::ConfigError(
                "probe step and nudge must be positive".into(),
            ));
        }
        if self.sink_grid < 0 || self.min_filler < 0 || self.work_triangle < 0 {
            return Err(Error::ConfigError(
                "grid, filler and triangle distances must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// What auto-fill should generate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AutoFillOptions {
    /// Place a sink under the first suitable high window.
    pub include_sink: bool,
    /// Place a cooker unit near the sink.
    pub include_cooker: bool,
    /// Sweep tall units.
    pub include_tall: bool,
    /// Sweep wall units and place a hood above the cooker.
    pub include_wall_cabinets: bool,
    /// Use drawer units instead of door units for base runs.
    pub prefer_drawers: bool,
    /// Placement constants.
    pub rules: FillRules,
}

impl AutoFillOptions {
    /// Creates options that only sweep base units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink, cooker, hood, base and wall runs.
    pub fn kitchen() -> Self {
        Self::new()
            .with_sink(true)
            .with_cooker(true)
            .with_wall_cabinets(true)
    }

    /// Enables or disables the sink.
    pub fn with_sink(mut self, enabled: bool) -> Self {
        self.include_sink = enabled;
        self
    }

    /// Enables or disables the cooker.
    pub fn with_cooker(mut self, enabled: bool) -> Self {
        self.include_cooker = enabled;
        self
    }

    /// Enables or disables tall units.
    pub fn with_tall(mut self, enabled: bool) -> Self {
        self.include_tall = enabled;
        self
    }

    /// Enables or disables wall units.
    pub fn with_wall_cabinets(mut self, enabled: bool) -> Self {
        self.include_wall_cabinets = enabled;
        self
    }

    /// Prefers drawer units for base runs.
    pub fn with_drawers(mut self, enabled: bool) -> Self {
        self.prefer_drawers = enabled;
        self
    }

    /// Sets the placement constants.
    pub fn with_rules(mut self, rules: FillRules) -> Self {
        self.rules = rules;
        self
    }

    /// Validates the placement constants.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()
    }
}
