//! End-to-end tests: zone layout through cutting plan.

use cabinetry::layout::{
    auto_fill, resolve_collisions, AutoFillOptions, BoardSettings, CabinetPreset, Obstacle,
    ProjectSettings, VerticalClass,
};
use cabinetry::nest::{Part, SheetSpec};
use cabinetry::{
    part_list_error, CabinetBom, CabinetUnit, CuttingPlanner, Error, NestConfig,
    PartListGenerator, Result, SequentialIds, Zone,
};

/// Box carcass with a single front. Fillers are one flat panel.
struct BoxCarcass;

impl PartListGenerator for BoxCarcass {
    fn parts_for(&self, unit: &CabinetUnit, board: &BoardSettings) -> Result<CabinetBom> {
        let t = board.carcass_thickness;
        let depth = board.depth_for(unit.class);
        let height = board.height_for(unit.class);
        let inner = unit.width - 2 * t;

        if unit.preset == CabinetPreset::Filler {
            return Ok(CabinetBom::new().with_part(Part::new(
                "panel",
                unit.width,
                height,
                board.front_material.clone(),
            )));
        }
        if inner <= 0 {
            return Err(part_list_error(unit, "too narrow for a carcass"));
        }

        let bom = CabinetBom::new()
            .with_part(
                Part::new("side", depth, height, board.carcass_material.clone()).with_quantity(2),
            )
            .with_part(
                Part::new("bottom", inner, depth, board.carcass_material.clone()).with_quantity(2),
            )
            .with_part(Part::new(
                "back",
                unit.width - 2,
                height - 2,
                board.back_material.clone(),
            ))
            .with_part(
                Part::new("front", unit.width - 4, height - 4, board.front_material.clone())
                    .with_rotation(false),
            );

        let bom = match unit.preset {
            CabinetPreset::BaseDrawer | CabinetPreset::ThreeDrawer => {
                bom.with_hardware("runner", 3)
            }
            CabinetPreset::Hood => bom.with_hardware("hood bracket", 2),
            _ => bom.with_hardware("hinge", 2),
        };
        Ok(match unit.class {
            VerticalClass::Wall => bom.with_hardware("hanger", 2),
            _ => bom.with_hardware("leg", 4),
        })
    }
}

fn kitchen_zone() -> Zone {
    let zone = Zone::new("kitchen", 3600)
        .with_obstacle(Obstacle::window(900, 1200, 950))
        .with_obstacle(Obstacle::door(3000, 600));
    let mut ids = SequentialIds::new();
    auto_fill(
        &zone,
        &ProjectSettings::default(),
        &AutoFillOptions::kitchen(),
        &mut ids,
    )
    .expect("kitchen fills")
}

mod planner_tests {
    use super::*;

    #[test]
    fn test_plan_covers_every_cabinet() {
        let zone = kitchen_zone();
        let board = BoardSettings::default();
        let plan = CuttingPlanner::default_config()
            .plan(&zone, &BoxCarcass, &board)
            .unwrap();

        assert_eq!(plan.zone_id, "kitchen");
        for cabinet in &zone.cabinets {
            assert!(
                plan.parts_of(&cabinet.id).count() > 0,
                "no parts for {}",
                cabinet.id
            );
        }

        let expected: usize = plan.parts.iter().map(|p| p.quantity).sum();
        assert_eq!(plan.nest.placed_count(), expected);
    }

    #[test]
    fn test_part_ids_are_tagged_and_unique() {
        let zone = kitchen_zone();
        let plan = CuttingPlanner::default_config()
            .plan(&zone, &BoxCarcass, &BoardSettings::default())
            .unwrap();

        let mut ids: Vec<&str> = plan.parts.iter().map(|p| p.id.as_str()).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);

        let first = &zone.cabinets[0];
        let side = plan
            .parts_of(&first.id)
            .find(|p| p.id.ends_with("/side"))
            .unwrap();
        let expected = format!("{} side", first.label.as_deref().unwrap());
        assert_eq!(side.label.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_parts_in_zone_order() {
        let zone = kitchen_zone();
        let plan = CuttingPlanner::default_config()
            .plan(&zone, &BoxCarcass, &BoardSettings::default())
            .unwrap();

        let mut owners: Vec<&str> = plan
            .parts
            .iter()
            .map(|p| p.id.split('/').next().unwrap())
            .collect();
        owners.dedup();
        let zone_order: Vec<&str> = zone.cabinets.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(owners, zone_order);
    }

    #[test]
    fn test_hardware_aggregated_by_name() {
        let zone = Zone::new("run", 1800)
            .with_cabinet(CabinetUnit::new("a", CabinetPreset::BaseDoor, 600))
            .with_cabinet(CabinetUnit::new("b", CabinetPreset::BaseDoor, 600).at(600))
            .with_cabinet(CabinetUnit::new("c", CabinetPreset::BaseDrawer, 600).at(1200))
            .with_cabinet(CabinetUnit::new("w", CabinetPreset::WallDoor, 600));
        let plan = CuttingPlanner::default_config()
            .plan(&zone, &BoxCarcass, &BoardSettings::default())
            .unwrap();

        assert_eq!(plan.hardware_count("hinge"), 6);
        assert_eq!(plan.hardware_count("runner"), 3);
        assert_eq!(plan.hardware_count("leg"), 12);
        assert_eq!(plan.hardware_count("hanger"), 2);
        assert_eq!(plan.hardware_count("handle"), 0);
        let names: Vec<&str> = plan.hardware.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["hinge", "leg", "runner", "hanger"]);
    }

    #[test]
    fn test_materials_nested_separately() {
        let zone = Zone::new("run", 1200)
            .with_cabinet(CabinetUnit::new("a", CabinetPreset::BaseDoor, 600))
            .with_cabinet(CabinetUnit::new("b", CabinetPreset::BaseDoor, 600).at(600));
        let board = BoardSettings::default();
        let plan = CuttingPlanner::default_config()
            .plan(&zone, &BoxCarcass, &board)
            .unwrap();

        let materials: Vec<&str> = plan
            .nest
            .materials
            .iter()
            .map(|m| m.material.as_str())
            .collect();
        assert_eq!(materials, vec!["carcass-18", "back-3", "front-18"]);
        assert_eq!(plan.nest.material("carcass-18").unwrap().parts, 8);
    }

    #[test]
    fn test_generator_errors_propagate() {
        let zone = Zone::new("narrow", 1000)
            .with_cabinet(CabinetUnit::new("slim", CabinetPreset::BaseDoor, 30));
        let err = CuttingPlanner::default_config()
            .plan(&zone, &BoxCarcass, &BoardSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::PartList(ref msg) if msg.contains("slim")));
    }

    #[test]
    fn test_nesting_errors_propagate() {
        let zone = Zone::new("tall", 1200)
            .with_cabinet(CabinetUnit::new("t", CabinetPreset::TallUtility, 600));
        let planner = CuttingPlanner::new(NestConfig::new().with_sheet(SheetSpec::new(1000, 1000)));
        let err = planner
            .plan(&zone, &BoxCarcass, &BoardSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnplaceablePart { .. }));
    }

    #[test]
    fn test_invalid_zone_rejected() {
        let zone = resolve_collisions(
            &Zone::new("tight", 1000)
                .with_cabinet(CabinetUnit::new("a", CabinetPreset::BaseDoor, 600))
                .with_cabinet(CabinetUnit::new("b", CabinetPreset::BaseDoor, 600).at(200)),
        )
        .unwrap()
        .zone;
        let err = CuttingPlanner::default_config()
            .plan(&zone, &BoxCarcass, &BoardSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidZoneGeometry { .. }));
    }

    #[test]
    fn test_closure_generator() {
        let zone = Zone::new("fronts", 1200)
            .with_cabinet(CabinetUnit::new("a", CabinetPreset::BaseDoor, 600))
            .with_cabinet(CabinetUnit::new("b", CabinetPreset::BaseDoor, 600).at(600));
        let fronts = |unit: &CabinetUnit, board: &BoardSettings| -> Result<CabinetBom> {
            Ok(CabinetBom::new().with_part(Part::new(
                "front",
                unit.width - 4,
                716,
                board.front_material.clone(),
            )))
        };
        let plan = CuttingPlanner::default_config()
            .plan(&zone, &fronts, &BoardSettings::default())
            .unwrap();
        assert_eq!(plan.nest.total_sheets(), 1);
        assert!(plan.hardware.is_empty());
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn plan_places_every_part(length in 1200i64..6000, drawers in any::<bool>()) {
            let mut ids = SequentialIds::new();
            let zone = auto_fill(
                &Zone::new("prop", length),
                &ProjectSettings::default(),
                &AutoFillOptions::new().with_wall_cabinets(true).with_drawers(drawers),
                &mut ids,
            )
            .unwrap();
            let plan = CuttingPlanner::default_config()
                .plan(&zone, &BoxCarcass, &BoardSettings::default())
                .unwrap();

            let expected: usize = plan.parts.iter().map(|p| p.quantity).sum();
            prop_assert_eq!(plan.nest.placed_count(), expected);
            prop_assert!(plan.nest.waste_percent <= 100);
        }
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use cabinetry::CuttingPlan;

    #[test]
    fn test_plan_round_trip() {
        let plan = CuttingPlanner::default_config()
            .plan(&kitchen_zone(), &BoxCarcass, &BoardSettings::default())
            .unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let back: CuttingPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
