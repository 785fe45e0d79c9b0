// File: crates/graph-core/src/clip.rs
// Summary: Clip a data-space line segment against the viewport rectangle.

use crate::geometry::Point;
use crate::viewport::Viewport;

const DEDUP_EPS: f64 = 1e-9;
const PARALLEL_EPS: f64 = 1e-12;

/// Visible chord of the segment `a -> b` inside the viewport, or `None` when
/// nothing renderable remains.
///
/// Inside endpoints are collected first; if fewer than two points are known
/// the segment is intersected with the four boundary edges. The viewport is
/// convex, so a visible line crosses the boundary at most twice: exactly two
/// collected points (after deduplication) are both necessary and sufficient.
/// A single-point overlap is not renderable as a line and is dropped.
pub fn clip_segment(a: Point, b: Point, viewport: &Viewport) -> Option<(Point, Point)> {
    let eps_x = DEDUP_EPS * viewport.x_span().abs().max(1.0);
    let eps_y = DEDUP_EPS * viewport.y_span().abs().max(1.0);
    let mut points: Vec<Point> = Vec::with_capacity(4);

    if viewport.contains(a.x, a.y) {
        push_unique(&mut points, a, eps_x, eps_y);
    }
    if viewport.contains(b.x, b.y) {
        push_unique(&mut points, b, eps_x, eps_y);
    }

    if points.len() < 2 {
        // Corners in data space; min/max keeps this correct under inversion.
        let x_lo = viewport.x_min.min(viewport.x_max);
        let x_hi = viewport.x_min.max(viewport.x_max);
        let y_lo = viewport.y_min.min(viewport.y_max);
        let y_hi = viewport.y_min.max(viewport.y_max);
        let corners = [
            Point::new(x_lo, y_lo),
            Point::new(x_hi, y_lo),
            Point::new(x_hi, y_hi),
            Point::new(x_lo, y_hi),
        ];
        for i in 0..4 {
            let e0 = corners[i];
            let e1 = corners[(i + 1) % 4];
            if let Some(p) = segment_intersection(a, b, e0, e1) {
                push_unique(&mut points, p, eps_x, eps_y);
            }
        }
    }

    if points.len() == 2 {
        Some((points[0], points[1]))
    } else {
        None
    }
}

/// Intersection of segment `a -> b` with edge `e0 -> e1`, accepted only when
/// both intersection parameters lie in [0, 1]. Solves the 2x2 system
/// `ta * (b - a) - tb * (e1 - e0) = e0 - a`; a near-zero determinant means
/// parallel lines and is rejected.
fn segment_intersection(a: Point, b: Point, e0: Point, e1: Point) -> Option<Point> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let ex = e1.x - e0.x;
    let ey = e1.y - e0.y;
    let det = ex * dy - dx * ey;
    if det.abs() < PARALLEL_EPS {
        return None;
    }
    let rx = e0.x - a.x;
    let ry = e0.y - a.y;
    let ta = (ex * ry - ey * rx) / det;
    let tb = (dx * ry - dy * rx) / det;
    if !(0.0..=1.0).contains(&ta) || !(0.0..=1.0).contains(&tb) {
        return None;
    }
    Some(Point::new(a.x + ta * dx, a.y + ta * dy))
}

fn push_unique(points: &mut Vec<Point>, p: Point, eps_x: f64, eps_y: f64) {
    let duplicate = points
        .iter()
        .any(|q| (q.x - p.x).abs() <= eps_x && (q.y - p.y).abs() <= eps_y);
    if !duplicate {
        points.push(p);
    }
}
