//! Sequential per-class labels (`B01`, `W01`, `T01`).

use crate::model::{CabinetUnit, VerticalClass};

/// Parses the number out of a label like `B07` for the given prefix.
pub fn parse_label(label: &str, prefix: &str) -> Option<u32> {
    let digits = label.trim().strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats a label, zero-padded to two digits.
pub fn format_label(prefix: &str, number: u32) -> String {
    format!("{}{:02}", prefix, number)
}

/// Sorts cabinets by offset and labels those without a label.
///
/// Numbering continues after the highest existing label of each class.
/// Cabinets that already carry a label keep it.
pub fn assign_labels(cabinets: &mut [CabinetUnit]) {
    cabinets.sort_by_key(|c| c.from_left);

    for class in VerticalClass::ALL {
        let prefix = class.label_prefix();
        let mut next = cabinets
            .iter()
            .filter(|c| c.class == class)
            .filter_map(|c| c.label.as_deref().and_then(|l| parse_label(l, prefix)))
            .max()
            .unwrap_or(0);

        for cabinet in cabinets
            .iter_mut()
            .filter(|c| c.class == class && c.needs_label())
        {
            next += 1;
            cabinet.label = Some(format_label(prefix, next));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CabinetPreset;

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("B07", "B"), Some(7));
        assert_eq!(parse_label("B120", "B"), Some(120));
        assert_eq!(parse_label("W07", "B"), None);
        assert_eq!(parse_label("B", "B"), None);
        assert_eq!(parse_label("Bx1", "B"), None);
        assert_eq!(parse_label("Sink", "B"), None);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("T", 3), "T03");
        assert_eq!(format_label("B", 12), "B12");
        assert_eq!(format_label("B", 100), "B100");
    }

    #[test]
    fn test_assign_continues_after_manual() {
        let mut cabinets = vec![
            CabinetUnit::new("c", CabinetPreset::BaseDoor, 600).at(1200),
            CabinetUnit::new("a", CabinetPreset::BaseDoor, 600)
                .at(0)
                .with_label("B05"),
            CabinetUnit::new("b", CabinetPreset::BaseDoor, 600).at(600),
            CabinetUnit::new("w", CabinetPreset::WallDoor, 600).at(0),
        ];
        assign_labels(&mut cabinets);

        let labels: Vec<(&str, &str)> = cabinets
            .iter()
            .map(|c| (c.id.as_str(), c.label.as_deref().unwrap()))
            .collect();
        assert_eq!(
            labels,
            vec![("a", "B05"), ("w", "W01"), ("b", "B06"), ("c", "B07")]
        );
    }

    #[test]
    fn test_custom_labels_are_kept() {
        let mut cabinets = vec![
            CabinetUnit::new("a", CabinetPreset::Sink, 900).with_label("Sink"),
            CabinetUnit::new("b", CabinetPreset::BaseDoor, 600).at(900),
        ];
        assign_labels(&mut cabinets);
        assert_eq!(cabinets[0].label.as_deref(), Some("Sink"));
        assert_eq!(cabinets[1].label.as_deref(), Some("B01"));
    }
}
