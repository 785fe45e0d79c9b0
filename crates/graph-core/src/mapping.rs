// File: crates/graph-core/src/mapping.rs
// Summary: Affine transform between data space and grid cells, plus outside codes.

use crate::error::{AxisKind, GraphError};
use crate::geometry::{Cell, GridRect, Point};
use crate::viewport::Viewport;

/// Outside code bit: left of the visible x interval.
pub const OUT_LEFT: u8 = 1;
/// Outside code bit: right of the visible x interval.
pub const OUT_RIGHT: u8 = 2;
/// Outside code bit: below the visible y interval.
pub const OUT_BELOW: u8 = 4;
/// Outside code bit: above the visible y interval.
pub const OUT_ABOVE: u8 = 8;

/// Data-to-grid mapping for one frame. Rebuilt on every redraw from the live
/// viewport and plot area; never mutated in place.
///
/// The scale factors are signed, so inverted axes fall out of the same math.
/// Rows grow downward while y grows upward, which is why `y_min` maps to the
/// bottom row.
#[derive(Clone, Copy, Debug)]
pub struct CoordMap {
    viewport: Viewport,
    area: GridRect,
    hbins_per_x: f64,
    vbins_per_y: f64,
}

impl CoordMap {
    /// Build the transform. Fails on a zero-span axis; callers must hand in a
    /// non-degenerate viewport.
    pub fn new(viewport: Viewport, area: GridRect) -> Result<Self, GraphError> {
        let x_span = viewport.x_span();
        let y_span = viewport.y_span();
        if x_span == 0.0 || !x_span.is_finite() {
            return Err(GraphError::DegenerateRange { axis: AxisKind::X });
        }
        if y_span == 0.0 || !y_span.is_finite() {
            return Err(GraphError::DegenerateRange { axis: AxisKind::Y });
        }
        Ok(Self {
            viewport,
            area,
            hbins_per_x: (area.right - area.left) as f64 / x_span,
            vbins_per_y: (area.top - area.bottom) as f64 / y_span,
        })
    }

    pub fn viewport(&self) -> Viewport { self.viewport }
    pub fn area(&self) -> GridRect { self.area }

    /// Map a data x to a column (nearest cell).
    pub fn map_x(&self, x: f64) -> i32 {
        (self.area.left as f64 + (x - self.viewport.x_min) * self.hbins_per_x).round() as i32
    }

    /// Map a data y to a row (nearest cell). `y_min` lands on the bottom row.
    pub fn map_y(&self, y: f64) -> i32 {
        (self.area.bottom as f64 + (y - self.viewport.y_min) * self.vbins_per_y).round() as i32
    }

    pub fn map(&self, p: Point) -> Cell {
        Cell::new(self.map_y(p.y), self.map_x(p.x))
    }

    pub fn fits_x(&self, x: f64) -> bool {
        self.viewport.contains_x(x)
    }
    pub fn fits_y(&self, y: f64) -> bool {
        self.viewport.contains_y(y)
    }
    pub fn fits(&self, x: f64, y: f64) -> bool {
        self.viewport.contains(x, y)
    }

    /// 4-bit outside code for one point. Zero means not provably outside;
    /// NaN coordinates also yield zero, so `fits` stays the authority for
    /// membership.
    pub fn outside_code(&self, x: f64, y: f64) -> u8 {
        let x_lo = self.viewport.x_min.min(self.viewport.x_max);
        let x_hi = self.viewport.x_min.max(self.viewport.x_max);
        let y_lo = self.viewport.y_min.min(self.viewport.y_max);
        let y_hi = self.viewport.y_min.max(self.viewport.y_max);
        let mut code = 0;
        if x < x_lo {
            code |= OUT_LEFT;
        }
        if x > x_hi {
            code |= OUT_RIGHT;
        }
        if y < y_lo {
            code |= OUT_BELOW;
        }
        if y > y_hi {
            code |= OUT_ABOVE;
        }
        code
    }

    /// Outside codes for a whole point buffer. Two consecutive points whose
    /// codes AND to nonzero are both beyond the same edge, so the segment
    /// between them can be skipped without clipping.
    pub fn classify(&self, xs: &[f64], ys: &[f64]) -> Vec<u8> {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| self.outside_code(x, y))
            .collect()
    }
}
