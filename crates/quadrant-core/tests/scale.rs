// File: crates/quadrant-core/tests/scale.rs
// Purpose: Validate linear scale endpoints, monotonicity and domain checks.

use approx::assert_relative_eq;
use quadrant_core::{LinearScale, QuadrantError};

#[test]
fn x_scale_endpoints() {
    let scale = LinearScale::x(1.0, 6.0, 300.0).expect("valid domain");
    assert_relative_eq!(scale.to_px(1.0), 0.0);
    assert_relative_eq!(scale.to_px(6.0), 300.0);
    assert_relative_eq!(scale.to_px(3.5), 150.0);
}

#[test]
fn y_scale_is_inverted() {
    let scale = LinearScale::y(1.0, 6.0, 500.0).expect("valid domain");
    assert_relative_eq!(scale.to_px(1.0), 500.0);
    assert_relative_eq!(scale.to_px(6.0), 0.0);
    assert_relative_eq!(scale.to_px(3.5), 250.0);
}

#[test]
fn x_scale_monotone_non_decreasing() {
    let scale = LinearScale::x(0.0, 3.0, 600.0).expect("valid domain");
    let mut prev = f64::NEG_INFINITY;
    let mut v = 0.0;
    while v <= 3.0 {
        let px = scale.to_px(v);
        assert!(px >= prev, "xScale must be non-decreasing, {px} < {prev} at {v}");
        prev = px;
        v += 0.05;
    }
}

#[test]
fn y_scale_monotone_non_increasing() {
    let scale = LinearScale::y(0.0, 3.0, 600.0).expect("valid domain");
    let mut prev = f64::INFINITY;
    let mut v = 0.0;
    while v <= 3.0 {
        let px = scale.to_px(v);
        assert!(px <= prev, "yScale must be non-increasing, {px} > {prev} at {v}");
        prev = px;
        v += 0.05;
    }
}

#[test]
fn from_px_inverts_to_px() {
    let scale = LinearScale::x(1.0, 6.0, 300.0).expect("valid domain");
    for v in [1.0, 2.25, 4.5, 6.0] {
        assert_relative_eq!(scale.from_px(scale.to_px(v)), v, max_relative = 1e-12);
    }
}

#[test]
fn degenerate_domain_is_rejected() {
    let err = LinearScale::x(3.0, 3.0, 600.0).unwrap_err();
    assert!(matches!(err, QuadrantError::InvalidDomain { min, max } if min == 3.0 && max == 3.0));

    let err = LinearScale::y(5.0, 2.0, 600.0).unwrap_err();
    assert!(matches!(err, QuadrantError::InvalidDomain { .. }));
}
