// File: crates/graph-core/tests/smoke.rs
// Purpose: End-to-end frame rendering on the in-memory canvas.

use graph_core::{BufferCanvas, Chart, CoordMap, GraphError, GridRect};

fn sine_chart(canvas: &mut BufferCanvas) -> Chart {
    let mut chart = Chart::new();
    chart
        .plot(canvas, &[0.0, 90.0, 180.0, 270.0], &[0.0, 1.0, 0.0, -1.0], "sine samples")
        .expect("plot succeeds");
    chart
}

#[test]
fn origin_axes_and_data_are_drawn() {
    let mut canvas = BufferCanvas::new(24, 80);
    let chart = sine_chart(&mut canvas);

    // Recreate the frame's mapping: default insets leave an 8-column gutter
    // and two bottom rows on a 24x80 canvas.
    let map = CoordMap::new(chart.viewport, GridRect::from_ltrb(8, 0, 79, 21)).unwrap();
    let origin_row = map.map_y(0.0) as usize;
    let origin_col = map.map_x(0.0) as usize;

    // (0, 0) is a sample, so its marker sits on top of the origin cross.
    assert_eq!(canvas.glyph_at(origin_row, origin_col), '#');
    // Arrowheads cap the axis lines.
    assert_eq!(canvas.glyph_at(0, origin_col), '^');
    assert_eq!(canvas.glyph_at(origin_row, 79), '>');
    // Axis body away from the data.
    assert_eq!(canvas.glyph_at(5, origin_col), '|');

    // Tick labels land in the borders: x spacing 100, y spacing 0.5.
    let text = canvas.to_text();
    assert!(text.contains("100"), "missing x tick label:\n{text}");
    assert!(text.contains("-1.0"), "missing y tick label:\n{text}");
}

#[test]
fn redraw_is_idempotent() {
    let mut canvas = BufferCanvas::new(24, 80);
    let mut chart = sine_chart(&mut canvas);

    let first: Vec<_> = canvas.ops().to_vec();
    chart.redraw(&mut canvas).expect("second redraw");
    assert_eq!(canvas.ops(), first.as_slice(), "draw sequences must match");
}

#[test]
fn legend_lists_series_labels_on_top() {
    let mut canvas = BufferCanvas::new(24, 80);
    let mut chart = sine_chart(&mut canvas);
    assert!(!canvas.to_text().contains("sine samples"));

    chart.toggle_legend(&mut canvas).expect("legend redraw");
    assert!(chart.legend_shown());
    assert!(canvas.to_text().contains("sine samples"));
}

#[test]
fn hiding_ticks_folds_the_borders_away() {
    let mut canvas = BufferCanvas::new(24, 80);
    let mut chart = sine_chart(&mut canvas);
    chart.toggle_ticks(&mut canvas).expect("ticks redraw");

    // The y axis now reaches the full bottom row and no labels remain.
    let text = canvas.to_text();
    assert!(!text.contains("-1.0"), "labels should be gone:\n{text}");
}

#[test]
fn shape_mismatch_is_rejected_and_nothing_is_added() {
    let mut canvas = BufferCanvas::new(24, 80);
    let mut chart = Chart::new();
    let err = chart.plot(&mut canvas, &[0.0, 1.0], &[0.0], "bad").unwrap_err();
    assert!(matches!(err, GraphError::ShapeMismatch { x_len: 2, y_len: 1 }));
    assert!(chart.series.is_empty());
}

#[test]
fn flat_series_under_auto_fit_is_a_degenerate_range() {
    let mut canvas = BufferCanvas::new(24, 80);
    let mut chart = Chart::new();
    let err = chart.plot(&mut canvas, &[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0], "flat").unwrap_err();
    assert!(matches!(err, GraphError::DegenerateRange { .. }));
}

#[test]
fn tiny_canvas_reports_too_small() {
    let mut canvas = BufferCanvas::new(2, 9);
    let mut chart = Chart::new();
    let err = chart.redraw(&mut canvas).unwrap_err();
    assert!(matches!(err, GraphError::CanvasTooSmall { rows: 2, cols: 9 }));
}
