// File: crates/quadrant-core/src/axis.rs
// Summary: Tick derivation for a linear scale using nice round-number steps.

use crate::scale::LinearScale;

/// Axis orientation; Bottom ticks point down, Left ticks point left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// One tick mark: domain value, pixel position on the scale, display label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f64,
    pub label: String,
}

/// Derive tick marks over the scale's domain. `count_hint` is a density hint,
/// not a guarantee: the step snaps to 1/2/5 x 10^k so tick values stay
/// human-friendly.
pub fn build_ticks(scale: &LinearScale, count_hint: usize) -> Vec<Tick> {
    let [min, max] = scale.domain;
    let step = tick_step(min, max, count_hint.max(1));
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    // division noise must not drop a boundary tick (3.0 / 0.2 lands just
    // under 15), so nudge in index space before snapping
    let start = (min / step - 1e-6).ceil() as i64;
    let stop = (max / step + 1e-6).floor() as i64;
    let mut ticks = Vec::with_capacity((stop - start + 1).max(0) as usize);
    for i in start..=stop {
        let value = i as f64 * step;
        ticks.push(Tick {
            value,
            px: scale.to_px(value),
            label: format_tick(value),
        });
    }
    ticks
}

/// Nice step covering `(max - min) / count`, snapped to 1/2/5 x 10^k.
fn tick_step(min: f64, max: f64, count: usize) -> f64 {
    let raw = (max - min) / count as f64;
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;
    // thresholds are sqrt(50), sqrt(10), sqrt(2)
    let factor = if error >= 7.0710678118654755 {
        10.0
    } else if error >= 3.1622776601683795 {
        5.0
    } else if error >= std::f64::consts::SQRT_2 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Integral tick values drop the decimal point; fractional values are
/// rounded to 6 decimals so `i * step` float noise never reaches the label.
pub fn format_tick(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
