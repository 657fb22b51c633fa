//! First-fit decreasing guillotine packer.

use crate::config::NestConfig;
use crate::guillotine::GuillotineTree;
use crate::part::Part;
use crate::result::NestResult;
use crate::sheet::{PlacedPart, SheetLayout, SheetSpec};
use cabinetry_core::{Error, Mm, Result};

/// One copy of a part waiting for a sheet.
#[derive(Debug, Clone)]
struct Instance<'a> {
    part: &'a Part,
    copy: usize,
}

impl Instance<'_> {
    fn area(&self) -> i64 {
        self.part.area()
    }
}

/// Cutting-stock nester.
#[derive(Debug, Clone, Default)]
pub struct Nester {
    config: NestConfig,
}

impl Nester {
    /// Creates a new nester with the given configuration.
    pub fn new(config: NestConfig) -> Self {
        Self { config }
    }

    /// Creates a nester with default configuration.
    pub fn default_config() -> Self {
        Self::new(NestConfig::default())
    }

    /// Configuration in use.
    pub fn config(&self) -> &NestConfig {
        &self.config
    }

    /// Packs every part instance onto stock sheets.
    ///
    /// Parts are grouped by material in first-appearance order. Within a
    /// material, instances are placed largest first, each in the first free
    /// leaf that holds it, opening a new sheet when nothing on the current one
    /// fits.
    ///
    /// # Errors
    /// - [`Error::InvalidSheet`] / [`Error::ConfigError`] for a bad config.
    /// - [`Error::InvalidPart`] for a malformed part.
    /// - [`Error::UnplaceablePart`] if a part with a non-zero quantity is
    ///   larger than an empty sheet.
    /// - [`Error::IterationLimitExceeded`] if a material needs more sheets
    ///   than `max_sheets_per_material`.
    pub fn pack(&self, parts: &[Part]) -> Result<NestResult> {
        self.config.validate()?;
        let spec = &self.config.sheet;

        for part in parts {
            part.validate()?;
        }
        for part in parts.iter().filter(|p| p.quantity > 0) {
            part.ensure_fits(spec)?;
        }

        let mut sheets = Vec::new();
        for (material, group) in group_by_material(parts) {
            let mut instances: Vec<Instance> = group
                .iter()
                .flat_map(|&part| (0..part.quantity).map(move |copy| Instance { part, copy }))
                .collect();
            if instances.is_empty() {
                continue;
            }
            // Stable: equal areas keep input order.
            instances.sort_by_key(|i| std::cmp::Reverse(i.area()));

            self.pack_material(material, instances, &mut sheets)?;
        }

        Ok(NestResult::from_sheets(sheets))
    }

    fn pack_material(
        &self,
        material: &str,
        mut pending: Vec<Instance>,
        sheets: &mut Vec<SheetLayout>,
    ) -> Result<()> {
        let spec = &self.config.sheet;
        let limit = self.config.max_sheets_per_material;
        let mut opened = 0;

        while !pending.is_empty() {
            if opened == limit {
                return Err(Error::IterationLimitExceeded {
                    material: material.to_string(),
                    remaining: pending.len(),
                    limit,
                });
            }

            let (placements, deferred) = fill_sheet(spec, pending);
            // Unreachable after the pre-check; guards against an endless loop.
            if let (true, Some(stuck)) = (placements.is_empty(), deferred.first()) {
                return Err(Error::UnplaceablePart {
                    part_id: stuck.part.id.clone(),
                    width: stuck.part.width,
                    length: stuck.part.length,
                    sheet_width: spec.width,
                    sheet_length: spec.length,
                });
            }

            let layout = SheetLayout::new(sheets.len(), material, spec, placements);
            log::debug!(
                "sheet {} ({}): {} parts, {}% waste, {} deferred",
                layout.index,
                material,
                layout.placements.len(),
                layout.waste_percent,
                deferred.len()
            );
            sheets.push(layout);
            opened += 1;
            pending = deferred;
        }
        Ok(())
    }
}

/// Places as many instances as possible on one fresh sheet. Returns the
/// placements and the instances left over, both in input order.
fn fill_sheet<'a>(
    spec: &SheetSpec,
    pending: Vec<Instance<'a>>,
) -> (Vec<PlacedPart>, Vec<Instance<'a>>) {
    let mut tree = GuillotineTree::new(spec.width, spec.length, spec.kerf);
    let mut placements = Vec::new();
    let mut deferred = Vec::new();

    for instance in pending {
        let part = instance.part;
        match tree.insert(part.width, part.length, part.rotatable) {
            Some(placed) => placements.push(PlacedPart {
                part_id: part.id.clone(),
                instance: instance.copy,
                label: part.display_label().to_string(),
                x: placed.rect.x,
                y: placed.rect.y,
                width: placed.rect.width,
                length: placed.rect.length,
                rotated: placed.rotated,
            }),
            None => deferred.push(instance),
        }
    }
    (placements, deferred)
}

/// Groups parts by material, keeping first-appearance order for both the
/// materials and the parts within each.
fn group_by_material(parts: &[Part]) -> Vec<(&str, Vec<&Part>)> {
    let mut groups: Vec<(&str, Vec<&Part>)> = Vec::new();
    for part in parts {
        match groups.iter_mut().find(|(m, _)| *m == part.material) {
            Some((_, group)) => group.push(part),
            None => groups.push((part.material.as_str(), vec![part])),
        }
    }
    groups
}

/// Packs `parts` onto sheets of `sheet` with default limits.
pub fn pack(parts: &[Part], sheet: &SheetSpec) -> Result<NestResult> {
    Nester::new(NestConfig::new().with_sheet(*sheet)).pack(parts)
}

/// Smallest sheet area that could hold every instance without waste.
pub fn total_part_area(parts: &[Part]) -> i64 {
    parts
        .iter()
        .map(|p| p.area() * p.quantity as i64)
        .sum()
}

/// Lower bound on sheets needed for `parts`, ignoring kerf and geometry.
pub fn sheet_lower_bound(parts: &[Part], sheet: &SheetSpec) -> usize {
    let area = sheet.area();
    if area <= 0 {
        return 0;
    }
    let needed: Mm = total_part_area(parts);
    ((needed + area - 1) / area) as usize
}
