//! Common geometry types shared across the slideview crates.
//!
//! - [`Point`] - 2D point with i32 coordinates (desktop space, may be negative)
//! - [`Size`] - width/height pair in pixels
//! - [`Rect`] - rectangle with origin and dimensions

use std::fmt;

/// A 2D point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle defined by top-left position and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Get the bottom edge (y + height).
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check if a point is contained within this rectangle.
    pub const fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Squared distance from a point to the closest edge of the rectangle.
    /// Zero when the point is inside.
    pub fn distance_sq_to(&self, point: Point) -> u64 {
        let dx = if point.x < self.x {
            (self.x - point.x) as i64
        } else if point.x >= self.right() {
            (point.x - self.right() + 1) as i64
        } else {
            0
        };
        let dy = if point.y < self.y {
            (self.y - point.y) as i64
        } else if point.y >= self.bottom() {
            (point.y - self.bottom() + 1) as i64
        } else {
            0
        };
        (dx * dx + dy * dy) as u64
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
