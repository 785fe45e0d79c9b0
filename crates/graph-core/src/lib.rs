// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports public API for grid plotting.

pub mod canvas;
pub mod chart;
pub mod clip;
pub mod error;
pub mod geometry;
pub mod mapping;
pub mod raster;
pub mod series;
pub mod theme;
pub mod ticks;
pub mod types;
pub mod viewport;

pub use canvas::{BufferCanvas, Canvas, DrawOp};
pub use chart::{Chart, RenderOptions};
pub use error::{AxisKind, GraphError};
pub use geometry::{Cell, GridRect, Point};
pub use mapping::CoordMap;
pub use raster::rasterize;
pub use series::{Series, SeriesId};
pub use theme::Theme;
pub use ticks::TickPlan;
pub use types::{Insets, StyleId};
pub use viewport::Viewport;
