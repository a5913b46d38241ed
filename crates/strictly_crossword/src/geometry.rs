//! Grid geometry: positions, dimensions and bounding rectangles.
//!
//! Coordinates are unsigned and bounded by `usize::MAX`. Every movement on the
//! grid goes through [`Position::step`], which refuses to wrap instead of
//! silently overflowing.

use super::word::Orientation;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Mul, MulAssign};
use tracing::instrument;

/// A cell on the grid, `x` grows to the right and `y` grows downwards.
///
/// Ordering is lexicographic on `(x, y)`, which keeps the sparse grid map
/// deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Display,
)]
#[display("({}, {})", x, y)]
pub struct Position {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Position {
    /// The top-left corner of the grid.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Creates a new position.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinate along the axis a word of `orientation` advances on.
    pub fn along(self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Moves `along` steps in the direction of `orientation` and `perp` steps
    /// perpendicular to it.
    ///
    /// Returns `None` if either coordinate would leave `0..=usize::MAX`.
    pub fn step(self, along: isize, perp: isize, orientation: Orientation) -> Option<Position> {
        let (dx, dy) = match orientation {
            Orientation::Horizontal => (along, perp),
            Orientation::Vertical => (perp, along),
        };
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// The next cell along `orientation`, if there is one.
    pub fn forward(self, orientation: Orientation) -> Option<Position> {
        self.step(1, 0, orientation)
    }

    /// The previous cell along `orientation`, if there is one.
    pub fn backward(self, orientation: Orientation) -> Option<Position> {
        self.step(-1, 0, orientation)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height of a rectangular region, in cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, derive_new::new,
)]
#[display("{}x{}", width, height)]
pub struct Dimensions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Dimensions {
    /// Zero-sized dimensions of an empty region.
    pub const ZERO: Dimensions = Dimensions {
        width: 0,
        height: 0,
    };
}

impl From<Dimensions> for (usize, usize) {
    fn from(dim: Dimensions) -> Self {
        (dim.width, dim.height)
    }
}

/// Axis-aligned rectangle given by its inclusive top-left and bottom-right
/// corners.
///
/// The rectangle is empty whenever `bottom_right` lies before `top_left` on
/// either axis. [`RectArea::EMPTY`] is the canonical empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectArea {
    top_left: Position,
    bottom_right: Position,
}

impl RectArea {
    /// The canonical empty rectangle: top-left `(1, 1)`, bottom-right `(0, 0)`.
    pub const EMPTY: RectArea = RectArea {
        top_left: Position { x: 1, y: 1 },
        bottom_right: Position { x: 0, y: 0 },
    };

    /// Creates a rectangle from its corners. The result may be empty.
    pub const fn new(top_left: Position, bottom_right: Position) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Position {
        self.top_left
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Position {
        self.bottom_right
    }

    /// Whether the rectangle contains no cell.
    pub fn is_empty(&self) -> bool {
        self.bottom_right.x < self.top_left.x || self.bottom_right.y < self.top_left.y
    }

    /// Whether `point` lies inside the rectangle.
    pub fn contains(&self, point: Position) -> bool {
        !self.is_empty()
            && (self.top_left.x..=self.bottom_right.x).contains(&point.x)
            && (self.top_left.y..=self.bottom_right.y).contains(&point.y)
    }

    /// Width and height in cells, `0x0` when empty.
    ///
    /// A rectangle spanning the whole coordinate domain has `usize::MAX + 1`
    /// cells on that axis; the count saturates at `usize::MAX`.
    pub fn size(&self) -> Dimensions {
        if self.is_empty() {
            return Dimensions::ZERO;
        }
        Dimensions {
            width: (self.bottom_right.x - self.top_left.x).saturating_add(1),
            height: (self.bottom_right.y - self.top_left.y).saturating_add(1),
        }
    }

    /// Grows the rectangle just enough to include `point`.
    ///
    /// An empty rectangle collapses to the single cell at `point`.
    #[instrument(level = "trace")]
    pub fn embrace(&mut self, point: Position) {
        if self.is_empty() {
            self.top_left = point;
            self.bottom_right = point;
            return;
        }
        self.top_left.x = self.top_left.x.min(point.x);
        self.top_left.y = self.top_left.y.min(point.y);
        self.bottom_right.x = self.bottom_right.x.max(point.x);
        self.bottom_right.y = self.bottom_right.y.max(point.y);
    }
}

impl Default for RectArea {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl MulAssign for RectArea {
    /// Intersection in place.
    fn mul_assign(&mut self, other: RectArea) {
        self.top_left.x = self.top_left.x.max(other.top_left.x);
        self.top_left.y = self.top_left.y.max(other.top_left.y);
        self.bottom_right.x = self.bottom_right.x.min(other.bottom_right.x);
        self.bottom_right.y = self.bottom_right.y.min(other.bottom_right.y);
    }
}

impl Mul for RectArea {
    type Output = RectArea;

    /// Intersection of two rectangles, possibly empty.
    fn mul(mut self, other: RectArea) -> RectArea {
        self *= other;
        self
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn step_never_wraps() {
        let pos = Position::new(kani::any(), kani::any());
        let along: isize = kani::any();
        let perp: isize = kani::any();
        kani::assume((-1..=1).contains(&along) && (-1..=1).contains(&perp));

        if let Some(next) = pos.step(along, perp, Orientation::Horizontal) {
            assert!(next.x.abs_diff(pos.x) <= 1);
            assert!(next.y.abs_diff(pos.y) <= 1);
        } else {
            assert!(
                (pos.x == 0 && along < 0)
                    || (pos.x == usize::MAX && along > 0)
                    || (pos.y == 0 && perp < 0)
                    || (pos.y == usize::MAX && perp > 0)
            );
        }
    }
}
