//! Nesting result representation.

use crate::metrics;
use crate::sheet::SheetLayout;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-material totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialSummary {
    /// Material tag.
    pub material: String,
    /// Sheets opened for the material.
    pub sheets: usize,
    /// Part instances placed.
    pub parts: usize,
    /// Rounded mean waste over the material's sheets.
    pub waste_percent: u32,
}

/// Result of a nesting run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestResult {
    /// Packed sheets, grouped by material in first-appearance order.
    pub sheets: Vec<SheetLayout>,

    /// Rounded mean waste over all sheets, 0 when there are none.
    pub waste_percent: u32,

    /// Totals per material, in the same order as `sheets`.
    pub materials: Vec<MaterialSummary>,
}

impl NestResult {
    /// Builds a result and its aggregates from packed sheets.
    pub fn from_sheets(sheets: Vec<SheetLayout>) -> Self {
        let mut materials: Vec<MaterialSummary> = Vec::new();
        let mut start = 0;
        while start < sheets.len() {
            let material = &sheets[start].material;
            let end = sheets[start..]
                .iter()
                .position(|s| &s.material != material)
                .map_or(sheets.len(), |offset| start + offset);
            let group = &sheets[start..end];
            materials.push(MaterialSummary {
                material: material.clone(),
                sheets: group.len(),
                parts: group.iter().map(|s| s.placements.len()).sum(),
                waste_percent: metrics::average_waste(group),
            });
            start = end;
        }

        Self {
            waste_percent: metrics::average_waste(&sheets),
            sheets,
            materials,
        }
    }

    /// Number of sheets across all materials.
    pub fn total_sheets(&self) -> usize {
        self.sheets.len()
    }

    /// Number of placed part instances.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    /// Sheets of one material.
    pub fn sheets_for<'a>(&'a self, material: &'a str) -> impl Iterator<Item = &'a SheetLayout> {
        self.sheets.iter().filter(move |s| s.material == material)
    }

    /// Summary for one material.
    pub fn material(&self, material: &str) -> Option<&MaterialSummary> {
        self.materials.iter().find(|m| m.material == material)
    }

    /// Placed area over total sheet area.
    pub fn utilization(&self) -> f64 {
        metrics::utilization(&self.sheets)
    }
}
