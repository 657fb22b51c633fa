//! Bill of materials and the part list generator seam.

use cabinetry_core::{Error, Result};
use cabinetry_layout::{BoardSettings, CabinetUnit};
use cabinetry_nest::Part;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A hardware item and how many are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hardware {
    /// Item name, used as the aggregation key.
    pub name: String,
    /// Count.
    pub quantity: u32,
}

impl Hardware {
    /// Creates a hardware line.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Parts and hardware for one cabinet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CabinetBom {
    /// Flat board parts.
    pub parts: Vec<Part>,
    /// Hardware lines.
    pub hardware: Vec<Hardware>,
}

impl CabinetBom {
    /// Creates an empty bill of materials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part.
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Adds a hardware line.
    pub fn with_hardware(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.hardware.push(Hardware::new(name, quantity));
        self
    }
}

/// Turns a placed cabinet into parts and hardware.
///
/// Construction rules live outside this crate. Implementations report their
/// own failures as [`Error::PartList`].
pub trait PartListGenerator {
    /// Builds the bill of materials for one cabinet.
    fn parts_for(&self, unit: &CabinetUnit, board: &BoardSettings) -> Result<CabinetBom>;
}

impl<F> PartListGenerator for F
where
    F: Fn(&CabinetUnit, &BoardSettings) -> Result<CabinetBom>,
{
    fn parts_for(&self, unit: &CabinetUnit, board: &BoardSettings) -> Result<CabinetBom> {
        self(unit, board)
    }
}

/// Sums hardware quantities by name, keeping first-appearance order.
pub fn aggregate_hardware<'a>(lines: impl IntoIterator<Item = &'a Hardware>) -> Vec<Hardware> {
    let mut totals: Vec<Hardware> = Vec::new();
    for line in lines {
        match totals.iter_mut().find(|h| h.name == line.name) {
            Some(total) => total.quantity = total.quantity.saturating_add(line.quantity),
            None => totals.push(line.clone()),
        }
    }
    totals
}

/// Shorthand for a generator failure.
pub fn part_list_error(unit: &CabinetUnit, reason: impl std::fmt::Display) -> Error {
    Error::PartList(format!("cabinet '{}': {}", unit.id, reason))
}
