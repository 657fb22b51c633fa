//! # Cabinetry Core
//!
//! Shared building blocks for the cabinetry layout engine and cutting-stock
//! nester.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Span`] (wall intervals), [`Rect`] (sheet rectangles),
//!   [`round_to_grid`]
//! - **Errors**: [`Error`] and the [`Result`] alias used by every engine
//! - **Identifiers**: the [`IdGenerator`] capability with [`UuidIds`] and
//!   [`SequentialIds`]
//!
//! ```rust
//! use cabinetry_core::{Span, Rect};
//!
//! let sink = Span::new(1200, 900);
//! let door = Span::new(2100, 820);
//! assert!(!sink.overlaps(&door));
//!
//! let sheet = Rect::sized(2800, 2070);
//! assert!(sheet.fits(600, 720));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod id;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{round_to_grid, Mm, Rect, Span};
pub use id::{IdGenerator, SequentialIds, UuidIds};
