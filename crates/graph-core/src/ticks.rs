// File: crates/graph-core/src/ticks.rs
// Summary: Nice tick spacing and enumeration for axis labels.

use crate::error::GraphError;

/// Minimum tick count on the x axis.
pub const X_MIN_TICKS: usize = 2;
/// Minimum tick count on the y axis.
pub const Y_MIN_TICKS: usize = 3;

// Tried in order against max_distance; halves and quarters of a power of ten
// beat fifths and tenths when they fit.
const SPACING_CANDIDATES: [f64; 4] = [0.5, 0.25, 0.2, 0.1];

/// Tick positions for one axis, recomputed every redraw.
#[derive(Clone, Debug, PartialEq)]
pub struct TickPlan {
    pub spacing: f64,
    pub positions: Vec<f64>,
}

impl TickPlan {
    /// Plan ticks over the numeric interval `[lo, hi]` (callers normalize
    /// inverted axes to `lo <= hi`) with at least `min_num` ticks worth of
    /// spacing.
    pub fn compute(lo: f64, hi: f64, min_num: usize) -> Result<Self, GraphError> {
        let spacing = nice_spacing(hi - lo, min_num)?;
        Ok(Self { spacing, positions: tick_positions(lo, hi, spacing) })
    }
}

/// Pick the largest round spacing strictly below `size / min_num`: the first
/// of {0.5, 0.25, 0.2, 0.1} times the smallest power of ten not below that
/// distance. Guarantees at least `min_num` ticks across `size`.
pub fn nice_spacing(size: f64, min_num: usize) -> Result<f64, GraphError> {
    let max_distance = size / min_num as f64;
    let upper = pow10_at_least(max_distance);
    for factor in SPACING_CANDIDATES {
        let spacing = factor * upper;
        if spacing < max_distance {
            return Ok(spacing);
        }
    }
    // Unreachable for positive finite size; NaN/zero spans end up here.
    Err(GraphError::TickPlanning { max_distance })
}

/// Enumerate multiples of `spacing` in `[zmin, zmax)`, starting at the first
/// multiple at or above `zmin`. Possibly empty.
pub fn tick_positions(zmin: f64, zmax: f64, spacing: f64) -> Vec<f64> {
    let mut out = Vec::new();
    if !(spacing > 0.0) || !zmin.is_finite() || !zmax.is_finite() {
        return out;
    }
    let mut t = (zmin / spacing).ceil() * spacing;
    while t < zmax {
        out.push(t);
        t += spacing;
    }
    out
}

/// Format a tick value with just enough decimals to show the spacing step.
pub fn format_tick(value: f64, spacing: f64) -> String {
    let decimals = spacing_decimals(spacing);
    format!("{value:.decimals$}")
}

fn spacing_decimals(spacing: f64) -> usize {
    for d in 0..=6 {
        let scaled = spacing * 10f64.powi(d);
        if (scaled - scaled.round()).abs() < 1e-9 {
            return d as usize;
        }
    }
    6
}

fn pow10_at_least(v: f64) -> f64 {
    // log10 of an exact power of ten can land a hair off either side of the
    // integer, so correct the ceiling after the fact.
    let mut p = 10f64.powf(v.log10().ceil());
    if p / 10.0 >= v {
        p /= 10.0;
    }
    if p < v {
        p *= 10.0;
    }
    p
}
