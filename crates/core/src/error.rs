//! Error types for the cabinetry engines.

use crate::geometry::Mm;
use thiserror::Error;

/// Result type alias for cabinetry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during layout or nesting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The zone itself is malformed (non-positive length, spans off the wall).
    #[error("Invalid zone geometry in '{zone_id}': {reason}")]
    InvalidZoneGeometry {
        /// Offending zone.
        zone_id: String,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// Collision resolution pushed a cabinet past the end of the wall.
    #[error("Cabinet '{cabinet_id}' ends at {end}mm, beyond the wall length of {total_length}mm")]
    UnresolvableOverlap {
        /// Cabinet that overflows.
        cabinet_id: String,
        /// Right edge of the cabinet after resolution.
        end: Mm,
        /// Wall length of the zone.
        total_length: Mm,
    },

    /// A part is larger than the stock sheet in every allowed orientation.
    #[error(
        "Part '{part_id}' ({width}x{length}mm) does not fit a {sheet_width}x{sheet_length}mm sheet"
    )]
    UnplaceablePart {
        /// Offending part.
        part_id: String,
        /// Part width.
        width: Mm,
        /// Part length.
        length: Mm,
        /// Sheet width.
        sheet_width: Mm,
        /// Sheet length.
        sheet_length: Mm,
    },

    /// The per-material packing loop hit its sheet bound with parts left over.
    #[error("Packing '{material}' exceeded {limit} sheets with {remaining} parts unplaced")]
    IterationLimitExceeded {
        /// Material group that failed.
        material: String,
        /// Part instances still waiting for a sheet.
        remaining: usize,
        /// Configured sheet bound.
        limit: usize,
    },

    /// Invalid part provided.
    #[error("Invalid part: {0}")]
    InvalidPart(String),

    /// Invalid sheet specification.
    #[error("Invalid sheet: {0}")]
    InvalidSheet(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The external part list generator failed.
    #[error("Part list generation failed: {0}")]
    PartList(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidZoneGeometry`].
    pub fn zone(zone_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidZoneGeometry {
            zone_id: zone_id.into(),
            reason: reason.into(),
        }
    }

    /// Returns the id of the cabinet or part the error refers to, if any.
    pub fn subject_id(&self) -> Option<&str> {
        match self {
            Self::UnresolvableOverlap { cabinet_id, .. } => Some(cabinet_id),
            Self::UnplaceablePart { part_id, .. } => Some(part_id),
            Self::InvalidZoneGeometry { zone_id, .. } => Some(zone_id),
            _ => None,
        }
    }
}
