//! Greedy left-to-right collision resolution.
//!
//! Cabinets are processed in `from_left` order. Each one is pushed right until
//! it clears every earlier cabinet that shares its height band, so a base
//! unit and a wall unit may keep the same span while two base units may not.
//! Pushes are never clamped to the wall: a cabinet that ends up past the end
//! of the wall is reported as an [`Overflow`] instead.

use crate::model::Zone;
use cabinetry_core::{Error, Mm, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cabinet that collision resolution pushed past the end of the wall.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Overflow {
    /// Offending cabinet.
    pub cabinet_id: String,
    /// Its right edge after resolution.
    pub end: Mm,
    /// Wall length.
    pub total_length: Mm,
}

impl Overflow {
    /// How far the cabinet sticks out past the wall.
    pub fn excess(&self) -> Mm {
        self.end - self.total_length
    }
}

impl From<Overflow> for Error {
    fn from(o: Overflow) -> Self {
        Error::UnresolvableOverlap {
            cabinet_id: o.cabinet_id,
            end: o.end,
            total_length: o.total_length,
        }
    }
}

/// Output of [`resolve_collisions`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resolution {
    /// The zone with cabinets sorted and pushed apart.
    pub zone: Zone,
    /// Cabinets that no longer fit on the wall, in placement order.
    pub overflows: Vec<Overflow>,
}

impl Resolution {
    /// Returns true if every cabinet still fits on the wall.
    pub fn is_clean(&self) -> bool {
        self.overflows.is_empty()
    }

    /// Returns the zone, or the first overflow as
    /// [`Error::UnresolvableOverlap`].
    pub fn into_strict(self) -> Result<Zone> {
        match self.overflows.into_iter().next() {
            Some(overflow) => Err(overflow.into()),
            None => Ok(self.zone),
        }
    }
}

/// Pushes overlapping cabinets apart within their compatibility groups.
///
/// # Errors
/// Returns [`Error::InvalidZoneGeometry`] if the input zone is malformed.
pub fn resolve_collisions(zone: &Zone) -> Result<Resolution> {
    zone.validate()?;

    let mut cabinets = zone.cabinets.clone();
    // Stable, so ties keep their input order.
    cabinets.sort_by_key(|c| c.from_left);

    for i in 0..cabinets.len() {
        let (placed, rest) = cabinets.split_at_mut(i);
        let current = &mut rest[0];
        let class = current.class;

        let max_right = placed
            .iter()
            .filter(|c| c.class.collides_with(class))
            .map(|c| c.end())
            .max();

        if let Some(right) = max_right {
            if right > current.from_left {
                log::debug!(
                    "zone {}: pushing '{}' from {} to {}",
                    zone.id,
                    current.id,
                    current.from_left,
                    right
                );
                current.from_left = right;
            }
        }
    }

    let overflows: Vec<Overflow> = cabinets
        .iter()
        .filter(|c| c.end() > zone.total_length)
        .map(|c| Overflow {
            cabinet_id: c.id.clone(),
            end: c.end(),
            total_length: zone.total_length,
        })
        .collect();

    for overflow in &overflows {
        log::warn!(
            "zone {}: cabinet '{}' overruns the wall by {}mm",
            zone.id,
            overflow.cabinet_id,
            overflow.excess()
        );
    }

    Ok(Resolution {
        zone: zone.with_cabinets(cabinets),
        overflows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CabinetPreset, CabinetUnit, VerticalClass};

    fn base(id: &str, from_left: Mm, width: Mm) -> CabinetUnit {
        CabinetUnit::new(id, CabinetPreset::BaseDoor, width).at(from_left)
    }

    fn offsets(zone: &Zone) -> Vec<Mm> {
        zone.cabinets.iter().map(|c| c.from_left).collect()
    }

    #[test]
    fn test_two_base_units_pushed_apart() {
        let zone = Zone::new("z", 3000)
            .with_cabinet(base("a", 0, 600))
            .with_cabinet(base("b", 100, 600));

        let resolved = resolve_collisions(&zone).unwrap();
        assert_eq!(offsets(&resolved.zone), vec![0, 600]);
        assert!(resolved.is_clean());
    }

    #[test]
    fn test_chained_push() {
        let zone = Zone::new("z", 3000)
            .with_cabinet(base("a", 0, 600))
            .with_cabinet(base("b", 200, 600))
            .with_cabinet(base("c", 400, 600));

        let resolved = resolve_collisions(&zone).unwrap();
        assert_eq!(offsets(&resolved.zone), vec![0, 600, 1200]);
    }

    #[test]
    fn test_base_and_wall_share_span() {
        let zone = Zone::new("z", 3000)
            .with_cabinet(base("a", 0, 600))
            .with_cabinet(CabinetUnit::new("w", CabinetPreset::WallDoor, 600));

        let resolved = resolve_collisions(&zone).unwrap();
        assert_eq!(offsets(&resolved.zone), vec![0, 0]);
    }

    #[test]
    fn test_tall_pushes_both_bands() {
        let zone = Zone::new("z", 3000)
            .with_cabinet(base("a", 0, 600))
            .with_cabinet(CabinetUnit::new("t", CabinetPreset::TallUtility, 600).at(300))
            .with_cabinet(CabinetUnit::new("w", CabinetPreset::WallDoor, 600).at(400));

        let resolved = resolve_collisions(&zone).unwrap();
        let zone = resolved.zone;
        assert_eq!(zone.cabinet("t").unwrap().from_left, 600);
        assert_eq!(zone.cabinet("w").unwrap().from_left, 1200);
        assert_eq!(zone.cabinet("w").unwrap().class, VerticalClass::Wall);
    }

    #[test]
    fn test_output_sorted_and_stable_on_ties() {
        let zone = Zone::new("z", 3000)
            .with_cabinet(base("late", 1000, 300))
            .with_cabinet(base("first", 0, 300))
            .with_cabinet(base("second", 0, 300));

        let resolved = resolve_collisions(&zone).unwrap();
        let ids: Vec<&str> = resolved.zone.cabinets.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "late"]);
        assert_eq!(offsets(&resolved.zone), vec![0, 300, 1000]);
    }

    #[test]
    fn test_overflow_is_reported_not_clamped() {
        let zone = Zone::new("z", 1500)
            .with_cabinet(base("a", 0, 600))
            .with_cabinet(base("b", 500, 600))
            .with_cabinet(base("c", 900, 600));

        let resolved = resolve_collisions(&zone).unwrap();
        assert_eq!(offsets(&resolved.zone), vec![0, 600, 1200]);
        assert_eq!(resolved.overflows.len(), 1);
        assert_eq!(resolved.overflows[0].cabinet_id, "c");
        assert_eq!(resolved.overflows[0].excess(), 300);

        match resolved.into_strict() {
            Err(Error::UnresolvableOverlap { cabinet_id, end, .. }) => {
                assert_eq!(cabinet_id, "c");
                assert_eq!(end, 1800);
            }
            other => panic!("expected overlap error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_zone_rejected() {
        let zone = Zone::new("z", 1000).with_cabinet(base("a", 600, 600));
        assert!(matches!(
            resolve_collisions(&zone),
            Err(Error::InvalidZoneGeometry { .. })
        ));
    }

    #[test]
    fn test_input_not_mutated() {
        let zone = Zone::new("z", 3000)
            .with_cabinet(base("a", 0, 600))
            .with_cabinet(base("b", 100, 600));
        let before = zone.clone();
        let _ = resolve_collisions(&zone).unwrap();
        assert_eq!(zone, before);
    }
}
