//! Stock sheet specification and packed sheet layouts.

use crate::metrics::waste_percent;
use cabinetry_core::{Error, Mm, Rect, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of the stock boards parts are cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetSpec {
    /// Board width.
    pub width: Mm,
    /// Board length.
    pub length: Mm,
    /// Saw blade width left between neighbouring parts.
    pub kerf: Mm,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            width: 2800,
            length: 2070,
            kerf: 4,
        }
    }
}

impl SheetSpec {
    /// Creates a sheet spec with no kerf.
    pub fn new(width: Mm, length: Mm) -> Self {
        Self {
            width,
            length,
            kerf: 0,
        }
    }

    /// Sets the kerf.
    pub fn with_kerf(mut self, kerf: Mm) -> Self {
        self.kerf = kerf;
        self
    }

    /// Board area.
    pub fn area(&self) -> i64 {
        self.width * self.length
    }

    /// Validates the spec.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.length <= 0 {
            return Err(Error::InvalidSheet(format!(
                "sheet must have positive dimensions, got {}x{}",
                self.width, self.length
            )));
        }
        if self.kerf < 0 {
            return Err(Error::InvalidSheet(format!(
                "kerf must not be negative, got {}",
                self.kerf
            )));
        }
        Ok(())
    }
}

/// One part instance placed on a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPart {
    /// Id of the source [`crate::Part`].
    pub part_id: String,
    /// Copy index (0-based) within the part's quantity.
    pub instance: usize,
    /// Display label.
    pub label: String,
    /// Left edge on the sheet.
    pub x: Mm,
    /// Top edge on the sheet.
    pub y: Mm,
    /// Extent along the sheet width, after rotation.
    pub width: Mm,
    /// Extent along the sheet length, after rotation.
    pub length: Mm,
    /// Whether the part was turned 90 degrees.
    pub rotated: bool,
}

impl PlacedPart {
    /// Footprint on the sheet.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.length)
    }

    /// Area of the footprint.
    pub fn area(&self) -> i64 {
        self.width * self.length
    }
}

/// A packed stock board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetLayout {
    /// Position in the overall cutting plan (0-based).
    pub index: usize,
    /// Material of the board.
    pub material: String,
    /// Board width.
    pub width: Mm,
    /// Board length.
    pub length: Mm,
    /// Placed parts in placement order.
    pub placements: Vec<PlacedPart>,
    /// Uncovered share of the board, 0 to 100.
    pub waste_percent: u32,
}

impl SheetLayout {
    /// Creates a layout and computes its waste.
    pub fn new(
        index: usize,
        material: impl Into<String>,
        spec: &SheetSpec,
        placements: Vec<PlacedPart>,
    ) -> Self {
        let used: i64 = placements.iter().map(PlacedPart::area).sum();
        Self {
            index,
            material: material.into(),
            width: spec.width,
            length: spec.length,
            waste_percent: waste_percent(spec.area(), used),
            placements,
        }
    }

    /// Board area.
    pub fn area(&self) -> i64 {
        self.width * self.length
    }

    /// Total area covered by parts.
    pub fn used_area(&self) -> i64 {
        self.placements.iter().map(PlacedPart::area).sum()
    }

    /// Board outline.
    pub fn bounds(&self) -> Rect {
        Rect::sized(self.width, self.length)
    }
}
