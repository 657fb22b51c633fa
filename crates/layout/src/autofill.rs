//! Auto-fill: synthesizes cabinets for the wall space manual units leave free.
//!
//! Every call starts from the manual cabinets alone, so generated units are
//! rebuilt from scratch and the result depends only on the input zone, the
//! options and the id generator.
//!
//! ## Procedure
//!
//! 1. Drop previously auto-filled units; manual units become fixed obstacles.
//! 2. Collect hard blocks (doors, columns, low windows).
//! 3. Sink under the first high window that can take one.
//! 4. Cooker at the work-triangle distance from the sink, probing outward.
//! 5. Hood above the cooker.
//! 6. Greedy sweeps for base, tall and wall runs with filler panels.
//! 7. Label everything that has no label yet.

use crate::labels::assign_labels;
use crate::model::{CabinetPreset, CabinetUnit, VerticalClass, Zone};
use crate::settings::{AutoFillOptions, FillRules, ProjectSettings};
use cabinetry_core::{round_to_grid, IdGenerator, Mm, Result, Span};

/// Wall space already taken, per height band.
#[derive(Debug, Clone, Default)]
struct Occupancy {
    hard_blocks: Vec<Span>,
    taken: Vec<(VerticalClass, Span)>,
}

impl Occupancy {
    fn new(hard_blocks: Vec<Span>) -> Self {
        Self {
            hard_blocks,
            taken: Vec::new(),
        }
    }

    fn occupy(&mut self, class: VerticalClass, span: Span) {
        self.taken.push((class, span));
    }

    /// Spans that block a unit of `class`.
    fn blockers(&self, class: VerticalClass) -> impl Iterator<Item = Span> + '_ {
        self.hard_blocks.iter().copied().chain(
            self.taken
                .iter()
                .filter(move |(c, _)| c.collides_with(class))
                .map(|(_, s)| *s),
        )
    }

    fn is_free(&self, class: VerticalClass, span: Span) -> bool {
        !self.blockers(class).any(|b| b.overlaps(&span))
    }

    /// What lies at `cursor` for a unit of `class`, looking no further than
    /// `limit`.
    fn run_at(&self, class: VerticalClass, cursor: Mm, limit: Mm) -> Run {
        let mut free_end = limit;
        let mut blocked_until = None;
        for blocker in self.blockers(class).filter(|b| !b.is_empty()) {
            if blocker.contains(cursor) {
                blocked_until = blocked_until.max(Some(blocker.end()));
            } else if blocker.start > cursor {
                free_end = free_end.min(blocker.start);
            }
        }
        match blocked_until {
            Some(end) => Run::Blocked(end),
            None => Run::Free((free_end - cursor).max(0)),
        }
    }
}

/// Wall space at the sweep cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    /// Inside an occupied span that ends at the given offset.
    Blocked(Mm),
    /// Free run of the given length.
    Free(Mm),
}

/// Generates cabinets for a zone.
#[derive(Debug, Clone, Default)]
pub struct AutoFiller {
    options: AutoFillOptions,
}

impl AutoFiller {
    /// Creates a filler with the given options.
    pub fn new(options: AutoFillOptions) -> Self {
        Self { options }
    }

    /// Creates a filler that only sweeps base units.
    pub fn default_config() -> Self {
        Self::new(AutoFillOptions::default())
    }

    /// Returns the options.
    pub fn options(&self) -> &AutoFillOptions {
        &self.options
    }

    fn rules(&self) -> &FillRules {
        &self.options.rules
    }

    /// Runs auto-fill and returns the new zone.
    ///
    /// Manual cabinets are kept unchanged (apart from labels they lacked);
    /// auto-filled cabinets in the input are discarded and regenerated.
    ///
    /// # Errors
    /// Returns [`cabinetry_core::Error::InvalidZoneGeometry`] for a malformed
    /// zone and [`cabinetry_core::Error::ConfigError`] for invalid settings
    /// or rules.
    pub fn fill(
        &self,
        zone: &Zone,
        settings: &ProjectSettings,
        ids: &mut dyn IdGenerator,
    ) -> Result<Zone> {
        zone.validate()?;
        settings.validate()?;
        self.options.validate()?;

        let rules = self.rules();
        let manual: Vec<CabinetUnit> = zone.manual_cabinets().cloned().collect();

        let mut occupancy = Occupancy::new(zone.hard_blocks(rules.soft_sill_threshold));
        for cabinet in &manual {
            occupancy.occupy(cabinet.class, cabinet.span());
        }

        let mut generated: Vec<CabinetUnit> = Vec::new();

        let manual_sink = manual.iter().find(|c| c.preset == CabinetPreset::Sink);
        let mut sink = manual_sink.map(CabinetUnit::span);
        if self.options.include_sink && manual_sink.is_none() {
            if let Some(span) = self.place_sink(zone, &occupancy) {
                let unit = self.unit(ids, CabinetPreset::Sink, VerticalClass::Base, span);
                occupancy.occupy(unit.class, span);
                generated.push(unit);
                sink = Some(span);
            }
        }

        let manual_cooker = manual
            .iter()
            .find(|c| c.preset == CabinetPreset::ThreeDrawer);
        let mut cooker = manual_cooker.map(CabinetUnit::span);
        if self.options.include_cooker && manual_cooker.is_none() {
            if let Some(span) = self.place_cooker(zone, sink, &occupancy) {
                let unit = self.unit(ids, CabinetPreset::ThreeDrawer, VerticalClass::Base, span);
                occupancy.occupy(unit.class, span);
                generated.push(unit);
                cooker = Some(span);
            }
        }

        if let (Some(span), true) = (cooker, self.options.include_wall_cabinets) {
            if occupancy.is_free(VerticalClass::Wall, span) {
                let unit = self.unit(ids, CabinetPreset::Hood, VerticalClass::Wall, span);
                occupancy.occupy(unit.class, span);
                generated.push(unit);
            } else {
                log::debug!("zone {}: hood span {:?} is occupied", zone.id, span);
            }
        }

        let mut classes = vec![VerticalClass::Base];
        if self.options.include_tall {
            classes.push(VerticalClass::Tall);
        }
        if self.options.include_wall_cabinets {
            classes.push(VerticalClass::Wall);
        }
        for class in classes {
            self.sweep(zone, class, &mut occupancy, ids, &mut generated);
        }

        let mut cabinets = manual;
        cabinets.extend(generated);
        assign_labels(&mut cabinets);

        log::debug!(
            "zone {}: {} cabinets after auto-fill ({} generated)",
            zone.id,
            cabinets.len(),
            cabinets.iter().filter(|c| c.is_auto_filled).count()
        );

        Ok(zone.with_cabinets(cabinets))
    }

    fn unit(
        &self,
        ids: &mut dyn IdGenerator,
        preset: CabinetPreset,
        class: VerticalClass,
        span: Span,
    ) -> CabinetUnit {
        CabinetUnit::new(ids.next_id("auto"), preset, span.width)
            .with_class(class)
            .at(span.start)
            .auto_filled()
    }

    /// First high window with room for a sink centred under it.
    fn place_sink(&self, zone: &Zone, occupancy: &Occupancy) -> Option<Span> {
        let rules = self.rules();
        for window in zone.soft_windows(rules.soft_sill_threshold) {
            let start = round_to_grid(
                window.span().center() - rules.sink_width / 2,
                rules.sink_grid,
            );
            let span = Span::new(start, rules.sink_width);

            if !span.is_within(zone.total_length) {
                log::debug!("zone {}: sink at {} falls off the wall", zone.id, start);
                continue;
            }
            if !occupancy.is_free(VerticalClass::Base, span) {
                log::debug!("zone {}: sink at {} is blocked", zone.id, start);
                continue;
            }
            return Some(span);
        }
        None
    }

    /// Cooker position: the work-triangle offset from the sink when it fits,
    /// otherwise the start of the wall, probed outward until free.
    fn place_cooker(&self, zone: &Zone, sink: Option<Span>, occupancy: &Occupancy) -> Option<Span> {
        let rules = self.rules();
        let width = rules.cooker_width;
        let cooker = Span::new(0, width);
        let limit = zone.total_length;
        let on_wall = |start: Mm| start >= 0 && start + width <= limit;
        let fits_at =
            |start: Mm| on_wall(start) && occupancy.is_free(VerticalClass::Base, cooker.at(start));

        let preferred = sink
            .map(|s| s.start + rules.work_triangle)
            .filter(|&p| on_wall(p))
            .unwrap_or(0);

        let mut offset = 0;
        loop {
            let right = preferred + offset;
            let left = preferred - offset;
            let right_open = right + width <= limit;
            let left_open = left >= 0;
            if !right_open && !left_open {
                log::debug!("zone {}: no free spot for a cooker", zone.id);
                return None;
            }

            if fits_at(right) {
                return Some(cooker.at(right));
            }
            if offset > 0 && fits_at(left) {
                return Some(cooker.at(left));
            }
            offset += rules.probe_step;
        }
    }

    fn sweep_preset(&self, class: VerticalClass) -> CabinetPreset {
        match class {
            VerticalClass::Base if self.options.prefer_drawers => CabinetPreset::BaseDrawer,
            VerticalClass::Base => CabinetPreset::BaseDoor,
            VerticalClass::Wall => CabinetPreset::WallDoor,
            VerticalClass::Tall => CabinetPreset::TallUtility,
        }
    }

    /// Greedy left-to-right run of standard units and fillers for one class.
    fn sweep(
        &self,
        zone: &Zone,
        class: VerticalClass,
        occupancy: &mut Occupancy,
        ids: &mut dyn IdGenerator,
        out: &mut Vec<CabinetUnit>,
    ) {
        let rules = self.rules();
        let limit = zone.total_length;
        let preset = self.sweep_preset(class);
        let mut cursor: Mm = 0;
        let mut skipped: Mm = 0;

        while cursor < limit {
            let fit = rules.standard_widths.iter().copied().find(|&w| {
                cursor + w <= limit && occupancy.is_free(class, Span::new(cursor, w))
            });

            if let Some(width) = fit {
                let span = Span::new(cursor, width);
                out.push(self.unit(ids, preset, class, span));
                occupancy.occupy(class, span);
                cursor += width;
                continue;
            }

            match occupancy.run_at(class, cursor, limit) {
                Run::Blocked(end) => cursor = end,
                Run::Free(gap) if gap >= rules.min_filler => {
                    let span = Span::new(cursor, gap);
                    out.push(self.unit(ids, CabinetPreset::Filler, class, span));
                    occupancy.occupy(class, span);
                    cursor += gap;
                }
                Run::Free(gap) => {
                    // Stays inside the free run so the next span is still measured.
                    let step = gap.min(rules.nudge);
                    skipped += step;
                    cursor += step;
                }
            }
        }

        if skipped > 0 {
            log::warn!(
                "zone {}: {:?} sweep left {}mm in gaps narrower than {}mm",
                zone.id,
                class,
                skipped,
                rules.min_filler
            );
        }
    }
}

/// Shorthand for `AutoFiller::new(options.clone()).fill(zone, settings, ids)`.
pub fn auto_fill(
    zone: &Zone,
    settings: &ProjectSettings,
    options: &AutoFillOptions,
    ids: &mut dyn IdGenerator,
) -> Result<Zone> {
    AutoFiller::new(options.clone()).fill(zone, settings, ids)
}
