//! Waste and utilization figures.

use crate::sheet::SheetLayout;

/// Uncovered share of a sheet as a whole percentage.
///
/// Rounds half away from zero and clamps to `0..=100`. A sheet without area
/// reports 0.
pub fn waste_percent(sheet_area: i64, used_area: i64) -> u32 {
    if sheet_area <= 0 {
        return 0;
    }
    let waste = (sheet_area - used_area).clamp(0, sheet_area);
    // round(100 * waste / area) in integers
    let pct = (200 * waste + sheet_area) / (2 * sheet_area);
    pct.clamp(0, 100) as u32
}

/// Mean of per-sheet waste, rounded. 0 for no sheets.
pub fn average_waste(sheets: &[SheetLayout]) -> u32 {
    if sheets.is_empty() {
        return 0;
    }
    let n = sheets.len() as u64;
    let total: u64 = sheets.iter().map(|s| u64::from(s.waste_percent)).sum();
    ((2 * total + n) / (2 * n)) as u32
}

/// Covered fraction of the combined sheet area, in `0.0..=1.0`.
pub fn utilization(sheets: &[SheetLayout]) -> f64 {
    let area: i64 = sheets.iter().map(SheetLayout::area).sum();
    if area <= 0 {
        return 0.0;
    }
    let used: i64 = sheets.iter().map(SheetLayout::used_area).sum();
    used as f64 / area as f64
}
