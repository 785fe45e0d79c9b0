// File: crates/graph-core/src/viewport.rs
// Summary: Visible data-space rectangle with auto-fit, pan, and zoom operations.

use crate::geometry::span_contains;
use crate::series::Series;

/// Fraction of the current span moved by one pan step.
pub const PAN_FRACTION: f64 = 0.2;
/// Span scale for one zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 0.75;
/// Span scale for one zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 4.0 / 3.0;
/// Symmetric vertical padding applied to auto-fitted bounds, as a fraction of
/// the full union y span.
pub const AUTO_Y_PADDING: f64 = 0.1;

/// The currently visible rectangle in data space. Either axis may be inverted
/// (`min > max`) to show a reversed view; all consumers handle that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// When set, bounds are recomputed from the series union every frame.
    pub auto: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0, auto: true }
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, auto: bool) -> Self {
        Self { x_min, x_max, y_min, y_max, auto }
    }

    /// Signed x span; negative when the axis is inverted.
    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    /// Signed y span; negative when the axis is inverted.
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    pub fn contains_x(&self, x: f64) -> bool {
        span_contains(self.x_min, self.x_max, x)
    }
    pub fn contains_y(&self, y: f64) -> bool {
        span_contains(self.y_min, self.y_max, y)
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }

    /// Recompute bounds from the union of all series extents: x exact, y
    /// padded by `AUTO_Y_PADDING` on both ends. Returns false (bounds
    /// retained) when no series contributes a finite extent; an empty scene
    /// is valid.
    pub fn fit_to(&mut self, series: &[Series]) -> bool {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            if let Some((lo, hi)) = s.x_extent() {
                x_min = x_min.min(lo);
                x_max = x_max.max(hi);
            }
            if let Some((lo, hi)) = s.y_extent() {
                y_min = y_min.min(lo);
                y_max = y_max.max(hi);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return false;
        }
        let pad = AUTO_Y_PADDING * (y_max - y_min);
        self.x_min = x_min;
        self.x_max = x_max;
        self.y_min = y_min - pad;
        self.y_max = y_max + pad;
        true
    }

    // Pan and zoom are pure functions of the current bounds. Every manual
    // step leaves auto mode; `autosize` re-enables it.

    pub fn pan_left(&mut self) {
        let dx = PAN_FRACTION * self.x_span();
        self.x_min -= dx;
        self.x_max -= dx;
        self.auto = false;
    }

    pub fn pan_right(&mut self) {
        let dx = PAN_FRACTION * self.x_span();
        self.x_min += dx;
        self.x_max += dx;
        self.auto = false;
    }

    pub fn pan_up(&mut self) {
        let dy = PAN_FRACTION * self.y_span();
        self.y_min += dy;
        self.y_max += dy;
        self.auto = false;
    }

    pub fn pan_down(&mut self) {
        let dy = PAN_FRACTION * self.y_span();
        self.y_min -= dy;
        self.y_max -= dy;
        self.auto = false;
    }

    pub fn zoom_in_x(&mut self) {
        self.scale_x(ZOOM_IN_FACTOR);
    }
    pub fn zoom_out_x(&mut self) {
        self.scale_x(ZOOM_OUT_FACTOR);
    }
    pub fn zoom_in_y(&mut self) {
        self.scale_y(ZOOM_IN_FACTOR);
    }
    pub fn zoom_out_y(&mut self) {
        self.scale_y(ZOOM_OUT_FACTOR);
    }

    pub fn autosize(&mut self) {
        self.auto = true;
    }

    fn scale_x(&mut self, factor: f64) {
        let center = (self.x_min + self.x_max) * 0.5;
        let half = self.x_span() * factor * 0.5;
        self.x_min = center - half;
        self.x_max = center + half;
        self.auto = false;
    }

    fn scale_y(&mut self, factor: f64) {
        let center = (self.y_min + self.y_max) * 0.5;
        let half = self.y_span() * factor * 0.5;
        self.y_min = center - half;
        self.y_max = center + half;
        self.auto = false;
    }
}
