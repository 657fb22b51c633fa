//! # Cabinetry Layout
//!
//! One-dimensional cabinet placement along a wall.
//!
//! ## Features
//!
//! - Zone model with typed obstacles and cabinet presets
//! - Collision resolution that respects height bands (base, wall, tall)
//! - Auto-fill with sink, cooker and hood placement, greedy standard-width
//!   runs and filler panels
//! - Per-class sequential labels
//!
//! ## Quick Start
//!
//! ```rust
//! use cabinetry_layout::{auto_fill, AutoFillOptions, Obstacle, ProjectSettings, Zone};
//! use cabinetry_core::SequentialIds;
//!
//! let zone = Zone::new("north", 3600)
//!     .with_obstacle(Obstacle::window(1200, 1000, 950))
//!     .with_obstacle(Obstacle::door(3000, 600));
//!
//! let mut ids = SequentialIds::new();
//! let filled = auto_fill(
//!     &zone,
//!     &ProjectSettings::default(),
//!     &AutoFillOptions::kitchen(),
//!     &mut ids,
//! )
//! .unwrap();
//!
//! for cabinet in &filled.cabinets {
//!     println!("{:?} {:?} at {}mm", cabinet.label, cabinet.preset, cabinet.from_left);
//! }
//! ```
//!
//! ## Collision Resolution
//!
//! ```rust
//! use cabinetry_layout::{resolve_collisions, CabinetPreset, CabinetUnit, Zone};
//!
//! let zone = Zone::new("east", 3000)
//!     .with_cabinet(CabinetUnit::new("a", CabinetPreset::BaseDoor, 600))
//!     .with_cabinet(CabinetUnit::new("b", CabinetPreset::BaseDoor, 600).at(100));
//!
//! let resolved = resolve_collisions(&zone).unwrap();
//! assert_eq!(resolved.zone.cabinets[1].from_left, 600);
//! assert!(resolved.is_clean());
//! ```

pub mod autofill;
pub mod collision;
pub mod labels;
pub mod model;
pub mod settings;

// Re-exports
pub use autofill::{auto_fill, AutoFiller};
pub use collision::{resolve_collisions, Overflow, Resolution};
pub use labels::assign_labels;
pub use model::{
    Blocking, CabinetPreset, CabinetUnit, Obstacle, ObstacleKind, VerticalClass, Zone,
    DEFAULT_WALL_HEIGHT, SOFT_SILL_THRESHOLD,
};
pub use settings::{AutoFillOptions, BoardSettings, FillRules, ProjectSettings};
pub use cabinetry_core::{Error, IdGenerator, Mm, Result, SequentialIds, Span, UuidIds};
