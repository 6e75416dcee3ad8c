// File: crates/quadrant-core/tests/ticks.rs
// Purpose: Tick derivation stays inside the domain with nice round steps.

use approx::assert_relative_eq;
use quadrant_core::axis::{build_ticks, format_tick};
use quadrant_core::LinearScale;

#[test]
fn unit_domain_yields_integer_ticks() {
    let scale = LinearScale::x(0.0, 3.0, 600.0).expect("valid domain");
    let ticks = build_ticks(&scale, 3);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "1", "2", "3"]);
}

#[test]
fn offset_domain_stays_inside_bounds() {
    let scale = LinearScale::x(1.0, 6.0, 300.0).expect("valid domain");
    let ticks = build_ticks(&scale, 6);
    assert!(!ticks.is_empty());
    for t in &ticks {
        assert!(t.value >= 1.0 && t.value <= 6.0, "tick {} out of domain", t.value);
        assert!(t.px >= 0.0 && t.px <= 300.0, "tick px {} out of range", t.px);
    }
    assert_relative_eq!(ticks.first().unwrap().value, 1.0);
    assert_relative_eq!(ticks.last().unwrap().value, 6.0);
}

#[test]
fn count_is_a_hint_with_nice_steps() {
    let scale = LinearScale::x(0.0, 3.0, 600.0).expect("valid domain");
    // hint 10 over span 3 snaps to step 0.2
    let ticks = build_ticks(&scale, 10);
    assert_eq!(ticks.len(), 16);
    assert_relative_eq!(ticks[1].value - ticks[0].value, 0.2, max_relative = 1e-9);
    // float noise must not leak into labels
    assert!(ticks.iter().any(|t| t.label == "0.6"));
}

#[test]
fn ticks_follow_scale_positions() {
    let scale = LinearScale::y(0.0, 4.0, 400.0).expect("valid domain");
    let ticks = build_ticks(&scale, 4);
    for t in &ticks {
        assert_relative_eq!(t.px, scale.to_px(t.value));
    }
    // inverted range: larger values sit higher (smaller px)
    assert_relative_eq!(ticks.first().unwrap().px, 400.0);
    assert_relative_eq!(ticks.last().unwrap().px, 0.0);
}

#[test]
fn tick_label_formatting() {
    assert_eq!(format_tick(2.0), "2");
    assert_eq!(format_tick(-1.0), "-1");
    assert_eq!(format_tick(0.5), "0.5");
    assert_eq!(format_tick(0.6000000000000001), "0.6");
}
