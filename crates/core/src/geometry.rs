//! Interval and rectangle primitives shared by the layout engine and the nester.
//!
//! All coordinates are integer millimetres. Intervals are half-open
//! (`[start, end)`), so two cabinets that merely touch do not overlap.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Millimetres.
pub type Mm = i64;

/// A horizontal interval along a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// Offset of the left edge.
    pub start: Mm,
    /// Extent to the right of `start`.
    pub width: Mm,
}

impl Span {
    /// Creates a span from a start offset and a width.
    pub const fn new(start: Mm, width: Mm) -> Self {
        Self { start, width }
    }

    /// Creates a span from its two edges.
    pub fn from_edges(start: Mm, end: Mm) -> Self {
        Self {
            start,
            width: (end - start).max(0),
        }
    }

    /// Exclusive right edge.
    pub const fn end(&self) -> Mm {
        self.start + self.width
    }

    /// Returns true if the span covers no length.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0
    }

    /// Checks whether two spans share any length.
    pub fn overlaps(&self, other: &Span) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end()
            && other.start < self.end()
    }

    /// Checks whether `x` lies in `[start, end)`.
    pub fn contains(&self, x: Mm) -> bool {
        x >= self.start && x < self.end()
    }

    /// Checks whether the span lies entirely in `[0, limit]`.
    pub fn is_within(&self, limit: Mm) -> bool {
        self.start >= 0 && self.width >= 0 && self.end() <= limit
    }

    /// Midpoint, rounded down.
    pub fn center(&self) -> Mm {
        self.start + self.width / 2
    }

    /// Returns the same span moved to a new start.
    pub fn at(&self, start: Mm) -> Self {
        Self::new(start, self.width)
    }
}

/// An axis-aligned rectangle on a sheet. `x` runs along the sheet width,
/// `y` along the sheet length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: Mm,
    /// Top edge.
    pub y: Mm,
    /// Extent along x.
    pub width: Mm,
    /// Extent along y.
    pub length: Mm,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: Mm, y: Mm, width: Mm, length: Mm) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    /// Creates a rectangle at the origin.
    pub const fn sized(width: Mm, length: Mm) -> Self {
        Self::new(0, 0, width, length)
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> Mm {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> Mm {
        self.y + self.length
    }

    /// Area in square millimetres.
    pub const fn area(&self) -> i64 {
        self.width * self.length
    }

    /// Returns true if the rectangle has no area.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.length <= 0
    }

    /// Checks whether a `width x length` rectangle fits without rotation.
    pub const fn fits(&self, width: Mm, length: Mm) -> bool {
        width <= self.width && length <= self.length
    }

    /// Checks whether two rectangles share any area.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Checks whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Horizontal extent as a [`Span`].
    pub fn x_span(&self) -> Span {
        Span::new(self.x, self.width)
    }
}

/// Rounds `value` to the nearest multiple of `grid`. Ties round up.
///
/// A non-positive grid returns `value` unchanged.
pub fn round_to_grid(value: Mm, grid: Mm) -> Mm {
    if grid <= 0 {
        return value;
    }
    (value + grid / 2).div_euclid(grid) * grid
}
