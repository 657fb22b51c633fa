//! # Cabinetry
//!
//! Cabinet wall layout and cutting-stock planning.
//!
//! This crate ties the engines together:
//!
//! - [`layout`]: places cabinets along a wall (collision resolution, auto-fill)
//! - [`nest`]: packs flat parts onto stock sheets
//! - [`PartListGenerator`]: the seam where cabinet construction rules turn a
//!   placed unit into parts and hardware
//! - [`CuttingPlanner`]: zone in, cutting plan out
//!
//! The layout engine and the nester never call each other; only the planner
//! sees both.
//!
//! ## Quick Start
//!
//! ```rust
//! use cabinetry::layout::{auto_fill, AutoFillOptions, BoardSettings, ProjectSettings, Zone};
//! use cabinetry::nest::Part;
//! use cabinetry::{CabinetBom, CabinetUnit, CuttingPlanner, Result, SequentialIds};
//!
//! let zone = Zone::new("north", 2400);
//! let mut ids = SequentialIds::new();
//! let zone = auto_fill(&zone, &ProjectSettings::default(), &AutoFillOptions::new(), &mut ids)?;
//!
//! // One front panel per cabinet.
//! let fronts = |unit: &CabinetUnit, board: &BoardSettings| -> Result<CabinetBom> {
//!     Ok(CabinetBom::new()
//!         .with_part(Part::new("front", unit.width - 4, 716, board.front_material.clone()))
//!         .with_hardware("hinge", 2))
//! };
//!
//! let plan = CuttingPlanner::default_config().plan(&zone, &fronts, &BoardSettings::default())?;
//! assert_eq!(plan.parts.len(), zone.cabinets.len());
//! assert_eq!(plan.hardware_count("hinge"), 2 * zone.cabinets.len() as u32);
//! # Ok::<(), cabinetry::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support on every crate

pub use cabinetry_layout as layout;
pub use cabinetry_nest as nest;

pub mod bom;
pub mod planner;

// Re-exports
pub use bom::{aggregate_hardware, part_list_error, CabinetBom, Hardware, PartListGenerator};
pub use planner::{CuttingPlan, CuttingPlanner};
pub use cabinetry_core::{Error, IdGenerator, Mm, Result, SequentialIds, UuidIds};
pub use cabinetry_layout::{CabinetUnit, Zone};
pub use cabinetry_nest::{NestConfig, NestResult};
