// File: crates/graph-core/src/series.rs
// Summary: Owned (x, y) data series with shape validation and extent queries.

use crate::error::GraphError;
use crate::geometry::Point;

/// Handle returned by `Chart::plot`, stable for the lifetime of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesId(pub(crate) usize);

impl SeriesId {
    /// Insertion index of the series.
    pub const fn index(&self) -> usize { self.0 }
}

/// One plotted data series. Coordinates are copied on construction so later
/// mutation of caller-owned buffers cannot corrupt a plotted series.
#[derive(Clone, Debug)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
    label: String,
    color_index: usize,
}

impl Series {
    /// Validate shapes and copy the data in. `color_index` selects into the
    /// theme palette (taken modulo its length at draw time).
    pub fn new(
        xs: &[f64],
        ys: &[f64],
        label: impl Into<String>,
        color_index: usize,
    ) -> Result<Self, GraphError> {
        if xs.len() != ys.len() {
            return Err(GraphError::ShapeMismatch { x_len: xs.len(), y_len: ys.len() });
        }
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            label: label.into(),
            color_index,
        })
    }

    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }
    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn label(&self) -> &str { &self.label }
    pub fn color_index(&self) -> usize { self.color_index }

    pub fn point(&self, i: usize) -> Point {
        Point::new(self.xs[i], self.ys[i])
    }

    /// Min/max over the finite x values, if any.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(&self.xs)
    }

    /// Min/max over the finite y values, if any.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(&self.ys)
    }
}

fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}
