// File: crates/graph-core/tests/ticks.rs
// Purpose: Validate nice spacing selection, tick enumeration, and label formatting.

use graph_core::ticks::{format_tick, nice_spacing, tick_positions};
use graph_core::{GraphError, TickPlan};

#[test]
fn spacing_prefers_the_largest_qualifying_candidate() {
    // size 10, two ticks minimum: max distance 5, candidates 5, 2.5, ... and
    // the first strictly below 5 is 2.5.
    assert_eq!(nice_spacing(10.0, 2).unwrap(), 2.5);
    // size 100, three ticks minimum: max distance 33.3 picks 25.
    assert_eq!(nice_spacing(100.0, 3).unwrap(), 25.0);
}

#[test]
fn spacing_guarantees_the_minimum_tick_count() {
    for &(size, min_num) in &[(1.0, 2), (7.0, 3), (360.0, 2), (0.001, 3), (1e9, 4)] {
        let spacing = nice_spacing(size, min_num).unwrap();
        assert!(
            size / spacing >= min_num as f64,
            "size {size} min {min_num} spacing {spacing}"
        );
    }
}

#[test]
fn zero_or_invalid_span_fails_planning() {
    assert!(matches!(nice_spacing(0.0, 2), Err(GraphError::TickPlanning { .. })));
    assert!(matches!(nice_spacing(f64::NAN, 2), Err(GraphError::TickPlanning { .. })));
}

#[test]
fn positions_start_at_the_first_multiple_and_exclude_the_upper_bound() {
    assert_eq!(tick_positions(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
    assert_eq!(tick_positions(0.1, 1.0, 0.25), vec![0.25, 0.5, 0.75]);
    assert_eq!(tick_positions(-1.2, 1.2, 0.5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    assert!(tick_positions(0.0, 0.0, 0.25).is_empty());
}

#[test]
fn plan_combines_spacing_and_positions() {
    let plan = TickPlan::compute(0.0, 10.0, 2).unwrap();
    assert_eq!(plan.spacing, 2.5);
    assert_eq!(plan.positions, vec![0.0, 2.5, 5.0, 7.5]);
}

#[test]
fn labels_carry_just_enough_decimals() {
    assert_eq!(format_tick(2.5, 2.5), "2.5");
    assert_eq!(format_tick(25.0, 25.0), "25");
    assert_eq!(format_tick(-1.0, 0.5), "-1.0");
    assert_eq!(format_tick(0.75, 0.25), "0.75");
}
