// File: crates/graph-core/tests/mapping.rs
// Purpose: Validate the data-to-grid affine transform, containment, and outside codes.

use graph_core::mapping::{CoordMap, OUT_ABOVE, OUT_BELOW, OUT_LEFT, OUT_RIGHT};
use graph_core::{AxisKind, GraphError, GridRect, Point, Viewport};

fn area() -> GridRect {
    GridRect::from_ltrb(0, 0, 10, 10)
}

#[test]
fn endpoints_map_to_area_edges() {
    let vp = Viewport::new(0.0, 10.0, 0.0, 10.0, false);
    let map = CoordMap::new(vp, area()).expect("valid mapping");
    assert_eq!(map.map_x(0.0), 0);
    assert_eq!(map.map_x(10.0), 10);
    assert_eq!(map.map_x(5.0), 5);
    // y grows upward: y_min lands on the bottom row.
    assert_eq!(map.map_y(0.0), 10);
    assert_eq!(map.map_y(10.0), 0);
    assert_eq!(map.map(Point::new(0.0, 0.0)), graph_core::Cell::new(10, 0));
}

#[test]
fn inverted_axis_maps_monotonically_decreasing() {
    let vp = Viewport::new(10.0, 0.0, 0.0, 10.0, false);
    let map = CoordMap::new(vp, area()).expect("valid mapping");
    assert_eq!(map.map_x(10.0), 0);
    assert_eq!(map.map_x(0.0), 10);
    let cols: Vec<i32> = (0..=10).map(|i| map.map_x(i as f64)).collect();
    for pair in cols.windows(2) {
        assert!(pair[1] < pair[0], "expected strictly decreasing columns: {cols:?}");
    }
}

#[test]
fn containment_agrees_between_inverted_and_plain_intervals() {
    let plain = CoordMap::new(Viewport::new(0.0, 10.0, -5.0, 5.0, false), area()).unwrap();
    let flipped = CoordMap::new(Viewport::new(10.0, 0.0, 5.0, -5.0, false), area()).unwrap();
    for &(x, y) in &[(0.0, 0.0), (10.0, 5.0), (5.0, -5.0), (-0.1, 0.0), (10.1, 0.0), (5.0, 5.1)] {
        assert_eq!(plain.fits(x, y), flipped.fits(x, y), "disagree at ({x}, {y})");
        assert_eq!(plain.fits(x, y), plain.fits_x(x) && plain.fits_y(y));
    }
}

#[test]
fn degenerate_ranges_are_rejected() {
    let err = CoordMap::new(Viewport::new(3.0, 3.0, 0.0, 1.0, false), area()).unwrap_err();
    assert!(matches!(err, GraphError::DegenerateRange { axis: AxisKind::X }));
    let err = CoordMap::new(Viewport::new(0.0, 1.0, -2.0, -2.0, false), area()).unwrap_err();
    assert!(matches!(err, GraphError::DegenerateRange { axis: AxisKind::Y }));
}

#[test]
fn outside_codes_flag_the_correct_sides() {
    let map = CoordMap::new(Viewport::new(0.0, 10.0, 0.0, 10.0, false), area()).unwrap();
    assert_eq!(map.outside_code(5.0, 5.0), 0);
    assert_eq!(map.outside_code(-1.0, 5.0), OUT_LEFT);
    assert_eq!(map.outside_code(11.0, 5.0), OUT_RIGHT);
    assert_eq!(map.outside_code(5.0, -1.0), OUT_BELOW);
    assert_eq!(map.outside_code(5.0, 11.0), OUT_ABOVE);
    assert_eq!(map.outside_code(-1.0, -1.0), OUT_LEFT | OUT_BELOW);

    // Two points beyond the same edge AND to nonzero: the segment is skippable.
    let codes = map.classify(&[-3.0, -1.0, 5.0], &[2.0, 8.0, 5.0]);
    assert_ne!(codes[0] & codes[1], 0);
    assert_eq!(codes[1] & codes[2], 0);
}

#[test]
fn nan_is_never_inside() {
    let map = CoordMap::new(Viewport::new(0.0, 10.0, 0.0, 10.0, false), area()).unwrap();
    assert!(!map.fits(f64::NAN, 5.0));
    assert!(!map.fits(5.0, f64::NAN));
    // NaN carries no side information; `fits` stays the membership authority.
    assert_eq!(map.outside_code(f64::NAN, f64::NAN), 0);
}
