//! # Cabinetry Nest
//!
//! Guillotine cutting-stock nesting for rectangular board parts.
//!
//! ## Features
//!
//! - Parts grouped by material, expanded by quantity, placed largest first
//! - Guillotine free-rectangle tree per sheet with saw kerf
//! - 90 degree rotation for parts without grain constraints
//! - Per-sheet and aggregate waste figures
//!
//! ## Quick Start
//!
//! ```rust
//! use cabinetry_nest::{pack, Part, SheetSpec};
//!
//! let parts = vec![
//!     Part::new("side", 560, 720, "carcass-18").with_quantity(2),
//!     Part::new("bottom", 564, 560, "carcass-18"),
//!     Part::new("back", 600, 720, "back-3"),
//! ];
//!
//! let result = pack(&parts, &SheetSpec::default()).unwrap();
//! assert_eq!(result.total_sheets(), 2);
//! assert_eq!(result.placed_count(), 4);
//!
//! for sheet in &result.sheets {
//!     println!("sheet {} ({}): {}% waste", sheet.index, sheet.material, sheet.waste_percent);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod guillotine;
pub mod metrics;
pub mod packer;
pub mod part;
pub mod result;
pub mod sheet;

// Re-exports
pub use config::{NestConfig, DEFAULT_MAX_SHEETS};
pub use guillotine::{GuillotineTree, NodeId, PackingNode, TreePlacement};
pub use metrics::{average_waste, waste_percent};
pub use packer::{pack, sheet_lower_bound, total_part_area, Nester};
pub use part::Part;
pub use result::{MaterialSummary, NestResult};
pub use sheet::{PlacedPart, SheetLayout, SheetSpec};
pub use cabinetry_core::{Error, Mm, Rect, Result};
