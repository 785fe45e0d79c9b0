// File: crates/graph-core/src/error.rs
// Summary: Error taxonomy for the plotting engine.

use thiserror::Error;

/// Which axis a range error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// All failures the engine can report. None are retried: given valid input the
/// engine is deterministic, so callers surface these and keep the prior frame.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A zero-span axis range; mapping into grid cells is undefined.
    #[error("degenerate {axis} axis: range has zero span")]
    DegenerateRange { axis: AxisKind },

    /// No nice-spacing candidate qualified. Unreachable for positive finite
    /// spans; reported instead of panicking when an invariant is violated.
    #[error("no tick spacing candidate below {max_distance}")]
    TickPlanning { max_distance: f64 },

    /// Series x/y buffers differ in length; the series is not added.
    #[error("series shape mismatch: {x_len} x values vs {y_len} y values")]
    ShapeMismatch { x_len: usize, y_len: usize },

    /// The backend canvas leaves no room for a plot area.
    #[error("canvas too small: {rows}x{cols} leaves no plot area")]
    CanvasTooSmall { rows: usize, cols: usize },
}
