//! Flat parts to be cut from stock sheets.

use crate::sheet::SheetSpec;
use cabinetry_core::{Error, Mm, Rect, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular part, possibly needed several times.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Unique identifier.
    pub id: String,
    /// Display label (e.g. "B03 side").
    pub label: Option<String>,
    /// Extent along the sheet width when not rotated.
    pub width: Mm,
    /// Extent along the sheet length when not rotated.
    pub length: Mm,
    /// Material tag. Parts are only nested with parts of the same material.
    pub material: String,
    /// Number of identical copies.
    pub quantity: usize,
    /// Whether the part may be turned 90 degrees. Grain-matched parts may not.
    pub rotatable: bool,
}

impl Part {
    /// Creates a single rotatable part.
    pub fn new(id: impl Into<String>, width: Mm, length: Mm, material: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            width,
            length,
            material: material.into(),
            quantity: 1,
            rotatable: true,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Allows or forbids rotation.
    pub fn with_rotation(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    /// Area of one copy.
    pub fn area(&self) -> i64 {
        self.width * self.length
    }

    /// Label, falling back to the id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Validates the part.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.length <= 0 {
            return Err(Error::InvalidPart(format!(
                "part '{}' must have positive dimensions, got {}x{}",
                self.id, self.width, self.length
            )));
        }
        if self.material.trim().is_empty() {
            return Err(Error::InvalidPart(format!(
                "part '{}' has no material",
                self.id
            )));
        }
        Ok(())
    }

    /// Checks whether the part fits an empty sheet in some allowed orientation.
    pub fn fits_on(&self, sheet: &SheetSpec) -> bool {
        let board = Rect::sized(sheet.width, sheet.length);
        board.fits(self.width, self.length)
            || (self.rotatable && board.fits(self.length, self.width))
    }

    /// Fails with [`Error::UnplaceablePart`] if the part can never be packed.
    pub fn ensure_fits(&self, sheet: &SheetSpec) -> Result<()> {
        if self.fits_on(sheet) {
            Ok(())
        } else {
            Err(Error::UnplaceablePart {
                part_id: self.id.clone(),
                width: self.width,
                length: self.length,
                sheet_width: sheet.width,
                sheet_length: sheet.length,
            })
        }
    }
}
