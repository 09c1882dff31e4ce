//! Integer canvas geometry: points, sizes, rectangles, and axes.
//!
//! All coordinates are canvas units with the origin at the top-left corner,
//! `x` growing right and `y` growing down. Edge and offset arithmetic
//! saturates, so extreme pointer positions or sizes compare as far away
//! instead of wrapping.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A pointer position or anchor on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub const fn offset_from(self, other: Point) -> Point {
        Point { x: self.x.saturating_sub(other.x), y: self.y.saturating_sub(other.y) }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Length of the canvas along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// One of the two canvas axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal; coordinates are `x` values.
    X,
    /// Vertical; coordinates are `y` values.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn orthogonal(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Axis-aligned rectangle with an integer top-left origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Leading coordinate along `axis` (`x` or `y`).
    #[must_use]
    pub const fn start(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Extent along `axis` (`width` or `height`).
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Trailing coordinate along `axis` (`right` or `bottom`).
    #[must_use]
    pub const fn end(&self, axis: Axis) -> i32 {
        self.start(axis).saturating_add(self.extent(axis))
    }

    /// Whether the point lies inside or on the border of the rectangle.
    #[must_use]
    pub const fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Positive-area intersection test.
    ///
    /// Rectangles that only share an edge or corner do not intersect, and an
    /// empty rectangle intersects nothing.
    #[must_use]
    pub const fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// Whether the rectangle lies entirely within `[0, width] x [0, height]`.
    #[must_use]
    pub const fn is_within(&self, canvas: Size) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= canvas.width && self.bottom() <= canvas.height
    }
}

/// Half-open range overlap test: `[a, a + a_len)` against `[b, b + b_len)`.
///
/// Touching ranges do not overlap.
#[must_use]
pub const fn ranges_overlap(a: i32, a_len: i32, b: i32, b_len: i32) -> bool {
    a < b.saturating_add(b_len) && a.saturating_add(a_len) > b
}
