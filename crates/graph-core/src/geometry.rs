// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry for data space (continuous) and grid space (cells).

/// A point in continuous data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A cell in discrete grid space. Signed so intermediate math can leave the
/// canvas; drawing clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Rectangle of grid cells with inclusive bounds on all four sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GridRect {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Number of columns covered (bounds inclusive).
    pub const fn width(&self) -> i32 { self.right - self.left + 1 }
    /// Number of rows covered (bounds inclusive).
    pub const fn height(&self) -> i32 { self.bottom - self.top + 1 }
    /// A usable plot area needs at least two cells per axis.
    pub const fn is_valid(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.col >= self.left && cell.col <= self.right
            && cell.row >= self.top && cell.row <= self.bottom
    }
}

/// Interval containment that treats `[a, b]` and `[b, a]` identically, so
/// inverted axes need no special casing. False for NaN anywhere.
#[inline]
pub fn span_contains(a: f64, b: f64, v: f64) -> bool {
    (v - a) * (v - b) <= 0.0
}
