// File: crates/graph-core/src/raster.rs
// Summary: Walk a grid-space segment and emit the cells to fill.

use crate::geometry::Cell;

/// Cells covering the segment between two grid points, ordered from `a`
/// toward `b`.
///
/// The walk advances in unit steps along the dominant axis (rows for steep
/// segments, columns otherwise) and derives the other coordinate from the
/// slope, so near-vertical lines cannot leave gaps. Segments that round to a
/// single cell yield nothing.
pub fn rasterize(a: Cell, b: Cell) -> Vec<Cell> {
    if a == b {
        return Vec::new();
    }
    let d_row = (b.row - a.row).abs();
    let d_col = (b.col - a.col).abs();
    let steep = d_col == 0 || d_row > d_col;
    if steep {
        walk(a.row, b.row, a.col, b.col)
            .into_iter()
            .map(|(row, col)| Cell::new(row, col))
            .collect()
    } else {
        walk(a.col, b.col, a.row, b.row)
            .into_iter()
            .map(|(col, row)| Cell::new(row, col))
            .collect()
    }
}

// Enumerate the inclusive primary interval in increasing order, then re-apply
// the original direction. Callers guarantee p0 != p1.
fn walk(p0: i32, p1: i32, s0: i32, s1: i32) -> Vec<(i32, i32)> {
    let slope = (s1 - s0) as f64 / (p1 - p0) as f64;
    let (lo, hi) = if p0 <= p1 { (p0, p1) } else { (p1, p0) };
    let mut cells: Vec<(i32, i32)> = (lo..=hi)
        .map(|p| {
            let s = s0 as f64 + (p - p0) as f64 * slope;
            (p, s.round() as i32)
        })
        .collect();
    if p0 > p1 {
        cells.reverse();
    }
    cells
}
