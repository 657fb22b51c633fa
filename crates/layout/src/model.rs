//! Zone, obstacle and cabinet types.

use cabinetry_core::{Error, Mm, Result, Span};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Windows whose sill sits lower than this are treated as hard blocks.
pub const SOFT_SILL_THRESHOLD: Mm = 300;

/// Default wall height for new zones.
pub const DEFAULT_WALL_HEIGHT: Mm = 2400;

/// Kind of fixed wall feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObstacleKind {
    /// Doorway. Always a hard block.
    Door,
    /// Window. Hard block only when the sill is low.
    Window,
    /// Structural column. Always a hard block.
    Column,
    /// Service pipe. Cabinets are built around it.
    Pipe,
}

/// How an obstacle constrains cabinet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocking {
    /// No cabinet may occupy the obstacle's span.
    Hard,
    /// High window: free to build under, preferred spot for a sink.
    SoftWindow,
    /// Does not constrain placement.
    None,
}

/// A fixed, immovable feature on the wall.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    /// What the obstacle is.
    pub kind: ObstacleKind,
    /// Offset of the left edge from the start of the wall.
    pub from_left: Mm,
    /// Horizontal extent.
    pub width: Mm,
    /// Vertical extent, if known.
    pub height: Option<Mm>,
    /// Distance from the floor to the bottom edge (windows).
    pub sill_height: Option<Mm>,
}

impl Obstacle {
    /// Creates an obstacle of the given kind.
    pub fn new(kind: ObstacleKind, from_left: Mm, width: Mm) -> Self {
        Self {
            kind,
            from_left,
            width,
            height: None,
            sill_height: None,
        }
    }

    /// Creates a door.
    pub fn door(from_left: Mm, width: Mm) -> Self {
        Self::new(ObstacleKind::Door, from_left, width)
    }

    /// Creates a window with the given sill height.
    pub fn window(from_left: Mm, width: Mm, sill_height: Mm) -> Self {
        Self::new(ObstacleKind::Window, from_left, width).with_sill_height(sill_height)
    }

    /// Creates a column.
    pub fn column(from_left: Mm, width: Mm) -> Self {
        Self::new(ObstacleKind::Column, from_left, width)
    }

    /// Creates a pipe.
    pub fn pipe(from_left: Mm, width: Mm) -> Self {
        Self::new(ObstacleKind::Pipe, from_left, width)
    }

    /// Sets the height.
    pub fn with_height(mut self, height: Mm) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the sill height.
    pub fn with_sill_height(mut self, sill_height: Mm) -> Self {
        self.sill_height = Some(sill_height);
        self
    }

    /// Horizontal span on the wall.
    pub fn span(&self) -> Span {
        Span::new(self.from_left, self.width)
    }

    /// Classifies the obstacle against a sill threshold.
    ///
    /// A window without a recorded sill is assumed to reach the floor.
    pub fn blocking(&self, soft_sill_threshold: Mm) -> Blocking {
        match self.kind {
            ObstacleKind::Door | ObstacleKind::Column => Blocking::Hard,
            ObstacleKind::Window => {
                if self.sill_height.unwrap_or(0) < soft_sill_threshold {
                    Blocking::Hard
                } else {
                    Blocking::SoftWindow
                }
            }
            ObstacleKind::Pipe => Blocking::None,
        }
    }

    /// Returns true if cabinets may never occupy this obstacle's span.
    pub fn is_hard_block(&self) -> bool {
        self.blocking(SOFT_SILL_THRESHOLD) == Blocking::Hard
    }

    /// Returns true for a window high enough to build under.
    pub fn is_soft_window(&self) -> bool {
        self.blocking(SOFT_SILL_THRESHOLD) == Blocking::SoftWindow
    }
}

/// Height band a cabinet occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticalClass {
    /// Floor-standing unit under the worktop.
    Base,
    /// Wall-hung unit above the worktop.
    Wall,
    /// Floor-to-ceiling unit spanning both bands.
    Tall,
}

impl VerticalClass {
    /// All classes in labeling order.
    pub const ALL: [VerticalClass; 3] = [Self::Base, Self::Wall, Self::Tall];

    /// Checks whether two classes share a height band.
    pub fn collides_with(self, other: VerticalClass) -> bool {
        match (self, other) {
            (Self::Tall, _) | (_, Self::Tall) => true,
            (a, b) => a == b,
        }
    }

    /// Prefix used for generated labels (`B01`, `W01`, `T01`).
    pub fn label_prefix(self) -> &'static str {
        match self {
            Self::Base => "B",
            Self::Wall => "W",
            Self::Tall => "T",
        }
    }
}

/// Cabinet template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CabinetPreset {
    /// Base unit with hinged doors.
    BaseDoor,
    /// Base unit with a drawer stack.
    BaseDrawer,
    /// Sink base.
    Sink,
    /// Three-drawer unit under the hob.
    ThreeDrawer,
    /// Extractor hood housing.
    Hood,
    /// Wall unit with hinged doors.
    WallDoor,
    /// Tall utility/pantry unit.
    TallUtility,
    /// Filler panel closing a small gap.
    Filler,
}

impl CabinetPreset {
    /// The class a preset is normally built in.
    pub fn default_class(self) -> VerticalClass {
        match self {
            Self::BaseDoor | Self::BaseDrawer | Self::Sink | Self::ThreeDrawer | Self::Filler => {
                VerticalClass::Base
            }
            Self::Hood | Self::WallDoor => VerticalClass::Wall,
            Self::TallUtility => VerticalClass::Tall,
        }
    }
}

/// A placed or to-be-placed cabinet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CabinetUnit {
    /// Unique identifier.
    pub id: String,
    /// Template the unit is built from.
    pub preset: CabinetPreset,
    /// Height band.
    pub class: VerticalClass,
    /// Horizontal extent.
    pub width: Mm,
    /// Offset of the left edge from the start of the wall.
    pub from_left: Mm,
    /// Set for units generated by auto-fill.
    pub is_auto_filled: bool,
    /// Display label such as `B03`.
    pub label: Option<String>,
}

impl CabinetUnit {
    /// Creates a manual unit at offset 0 in the preset's default class.
    pub fn new(id: impl Into<String>, preset: CabinetPreset, width: Mm) -> Self {
        Self {
            id: id.into(),
            preset,
            class: preset.default_class(),
            width,
            from_left: 0,
            is_auto_filled: false,
            label: None,
        }
    }

    /// Sets the offset.
    pub fn at(mut self, from_left: Mm) -> Self {
        self.from_left = from_left;
        self
    }

    /// Overrides the vertical class.
    pub fn with_class(mut self, class: VerticalClass) -> Self {
        self.class = class;
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the unit as engine-generated.
    pub fn auto_filled(mut self) -> Self {
        self.is_auto_filled = true;
        self
    }

    /// Horizontal span on the wall.
    pub fn span(&self) -> Span {
        Span::new(self.from_left, self.width)
    }

    /// Exclusive right edge.
    pub fn end(&self) -> Mm {
        self.from_left + self.width
    }

    /// Checks whether two units occupy overlapping wall space in a shared band.
    pub fn collides_with(&self, other: &CabinetUnit) -> bool {
        self.class.collides_with(other.class) && self.span().overlaps(&other.span())
    }

    /// Returns true if the unit has no usable label.
    pub fn needs_label(&self) -> bool {
        self.label.as_deref().map_or(true, |l| l.trim().is_empty())
    }
}

/// A wall segment being laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Zone {
    /// Unique identifier.
    pub id: String,
    /// Usable wall length.
    pub total_length: Mm,
    /// Floor-to-ceiling height.
    pub wall_height: Mm,
    /// Fixed wall features.
    pub obstacles: Vec<Obstacle>,
    /// Cabinets on this wall, manual and auto-filled.
    pub cabinets: Vec<CabinetUnit>,
}

impl Zone {
    /// Creates an empty zone.
    pub fn new(id: impl Into<String>, total_length: Mm) -> Self {
        Self {
            id: id.into(),
            total_length,
            wall_height: DEFAULT_WALL_HEIGHT,
            obstacles: Vec::new(),
            cabinets: Vec::new(),
        }
    }

    /// Sets the wall height.
    pub fn with_wall_height(mut self, wall_height: Mm) -> Self {
        self.wall_height = wall_height;
        self
    }

    /// Adds an obstacle.
    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Adds a cabinet.
    pub fn with_cabinet(mut self, cabinet: CabinetUnit) -> Self {
        self.cabinets.push(cabinet);
        self
    }

    /// Returns the same zone with a different cabinet list.
    pub fn with_cabinets(&self, cabinets: Vec<CabinetUnit>) -> Self {
        Self {
            id: self.id.clone(),
            total_length: self.total_length,
            wall_height: self.wall_height,
            obstacles: self.obstacles.clone(),
            cabinets,
        }
    }

    /// User-placed cabinets.
    pub fn manual_cabinets(&self) -> impl Iterator<Item = &CabinetUnit> {
        self.cabinets.iter().filter(|c| !c.is_auto_filled)
    }

    /// Engine-generated cabinets.
    pub fn auto_filled_cabinets(&self) -> impl Iterator<Item = &CabinetUnit> {
        self.cabinets.iter().filter(|c| c.is_auto_filled)
    }

    /// Cabinets of one class, in list order.
    pub fn cabinets_in(&self, class: VerticalClass) -> impl Iterator<Item = &CabinetUnit> {
        self.cabinets.iter().filter(move |c| c.class == class)
    }

    /// Looks up a cabinet by id.
    pub fn cabinet(&self, id: &str) -> Option<&CabinetUnit> {
        self.cabinets.iter().find(|c| c.id == id)
    }

    /// Spans no cabinet may occupy.
    pub fn hard_blocks(&self, soft_sill_threshold: Mm) -> Vec<Span> {
        self.obstacles
            .iter()
            .filter(|o| o.blocking(soft_sill_threshold) == Blocking::Hard)
            .map(Obstacle::span)
            .collect()
    }

    /// High windows, in obstacle order.
    pub fn soft_windows(&self, soft_sill_threshold: Mm) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(move |o| o.blocking(soft_sill_threshold) == Blocking::SoftWindow)
    }

    /// Validates the zone geometry.
    ///
    /// Every obstacle and cabinet must have positive width and lie within
    /// `[0, total_length]`. An obstacle with a recorded height must fit
    /// between its sill (or the floor) and the top of the wall. Nothing is
    /// clamped.
    pub fn validate(&self) -> Result<()> {
        if self.total_length <= 0 {
            return Err(Error::zone(
                &self.id,
                format!("total length must be positive, got {}", self.total_length),
            ));
        }
        if self.wall_height <= 0 {
            return Err(Error::zone(
                &self.id,
                format!("wall height must be positive, got {}", self.wall_height),
            ));
        }

        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if obstacle.width <= 0 {
                return Err(Error::zone(
                    &self.id,
                    format!("obstacle {} ({:?}) has non-positive width", i, obstacle.kind),
                ));
            }
            if let Some(height) = obstacle.height {
                let top = obstacle.sill_height.unwrap_or(0) + height;
                if height <= 0 || top > self.wall_height {
                    return Err(Error::zone(
                        &self.id,
                        format!(
                            "obstacle {} ({:?}) height {} does not fit under the {}mm wall",
                            i, obstacle.kind, height, self.wall_height
                        ),
                    ));
                }
            }
            if !obstacle.span().is_within(self.total_length) {
                return Err(Error::zone(
                    &self.id,
                    format!(
                        "obstacle {} ({:?}) spans {}..{} outside 0..{}",
                        i,
                        obstacle.kind,
                        obstacle.from_left,
                        obstacle.span().end(),
                        self.total_length
                    ),
                ));
            }
        }

        for cabinet in &self.cabinets {
            if cabinet.width <= 0 {
                return Err(Error::zone(
                    &self.id,
                    format!("cabinet '{}' has non-positive width", cabinet.id),
                ));
            }
            if !cabinet.span().is_within(self.total_length) {
                return Err(Error::zone(
                    &self.id,
                    format!(
                        "cabinet '{}' spans {}..{} outside 0..{}",
                        cabinet.id,
                        cabinet.from_left,
                        cabinet.end(),
                        self.total_length
                    ),
                ));
            }
        }

        Ok(())
    }
}
