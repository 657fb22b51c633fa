//! Zone to cutting plan pipeline.

use crate::bom::{aggregate_hardware, Hardware, PartListGenerator};
use cabinetry_core::Result;
use cabinetry_layout::{BoardSettings, CabinetUnit, Zone};
use cabinetry_nest::{NestConfig, NestResult, Nester, Part};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to cut and assemble one wall.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CuttingPlan {
    /// Zone the plan was built for.
    pub zone_id: String,
    /// All parts, tagged with their cabinet, in zone order.
    pub parts: Vec<Part>,
    /// Hardware totals by name.
    pub hardware: Vec<Hardware>,
    /// Packed sheets.
    pub nest: NestResult,
}

impl CuttingPlan {
    /// Total hardware count for one item name.
    pub fn hardware_count(&self, name: &str) -> u32 {
        self.hardware
            .iter()
            .find(|h| h.name == name)
            .map_or(0, |h| h.quantity)
    }

    /// Parts generated for one cabinet.
    pub fn parts_of<'a>(&'a self, cabinet_id: &str) -> impl Iterator<Item = &'a Part> {
        let prefix = format!("{}/", cabinet_id);
        self.parts.iter().filter(move |p| p.id.starts_with(&prefix))
    }
}

/// Builds cutting plans from laid-out zones.
#[derive(Debug, Clone, Default)]
pub struct CuttingPlanner {
    nester: Nester,
}

impl CuttingPlanner {
    /// Creates a planner that nests with `config`.
    pub fn new(config: NestConfig) -> Self {
        Self {
            nester: Nester::new(config),
        }
    }

    /// Creates a planner with default nesting configuration.
    pub fn default_config() -> Self {
        Self::new(NestConfig::default())
    }

    /// Generates parts for every cabinet in zone order, totals the hardware
    /// and nests the parts.
    ///
    /// Part ids are prefixed with the cabinet id (`"<cabinet>/<part>"`) so
    /// they stay unique across the zone. Parts without a label get one built
    /// from the cabinet label.
    pub fn plan<G>(&self, zone: &Zone, generator: &G, board: &BoardSettings) -> Result<CuttingPlan>
    where
        G: PartListGenerator + ?Sized,
    {
        zone.validate()?;
        board.validate()?;

        let mut parts = Vec::new();
        let mut hardware = Vec::new();
        for unit in &zone.cabinets {
            let bom = generator.parts_for(unit, board)?;
            log::debug!(
                "cabinet {} ({:?}): {} parts, {} hardware lines",
                unit.id,
                unit.preset,
                bom.parts.len(),
                bom.hardware.len()
            );
            parts.extend(bom.parts.into_iter().map(|part| tag_part(unit, part)));
            hardware.extend(bom.hardware);
        }

        let nest = self.nester.pack(&parts)?;
        log::debug!(
            "zone {}: {} parts on {} sheets, {}% waste",
            zone.id,
            parts.len(),
            nest.total_sheets(),
            nest.waste_percent
        );

        Ok(CuttingPlan {
            zone_id: zone.id.clone(),
            hardware: aggregate_hardware(&hardware),
            parts,
            nest,
        })
    }
}

fn tag_part(unit: &CabinetUnit, mut part: Part) -> Part {
    if part.label.is_none() {
        part.label = Some(match &unit.label {
            Some(label) => format!("{} {}", label, part.id),
            None => format!("{} {}", unit.id, part.id),
        });
    }
    part.id = format!("{}/{}", unit.id, part.id);
    part
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetry_layout::CabinetPreset;

    #[test]
    fn test_tag_part() {
        let unit = CabinetUnit::new("c1", CabinetPreset::BaseDoor, 600).with_label("B01");
        let part = tag_part(&unit, Part::new("side", 560, 720, "mdf"));
        assert_eq!(part.id, "c1/side");
        assert_eq!(part.label.as_deref(), Some("B01 side"));

        let kept = tag_part(&unit, Part::new("door", 596, 716, "mdf").with_label("front"));
        assert_eq!(kept.label.as_deref(), Some("front"));

        let bare = CabinetUnit::new("c2", CabinetPreset::Filler, 50);
        assert_eq!(
            tag_part(&bare, Part::new("panel", 50, 720, "mdf")).label.as_deref(),
            Some("c2 panel")
        );
    }
}
