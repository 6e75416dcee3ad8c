// File: crates/quadrant-core/src/scale.rs
// Summary: Linear domain-to-pixel scales for the X and Y axes.

use crate::error::{QuadrantError, QuadrantResult};

/// Linear interpolation from a numeric domain onto a pixel range.
///
/// Scales are re-derived from the chart's current dimensions on every
/// pipeline run rather than cached, so they can never go stale after an
/// `update`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    /// Build a scale, rejecting a degenerate or inverted domain.
    pub fn try_new(domain: [f64; 2], range: [f64; 2]) -> QuadrantResult<Self> {
        if !(domain[0] < domain[1]) {
            return Err(QuadrantError::InvalidDomain { min: domain[0], max: domain[1] });
        }
        Ok(Self { domain, range })
    }

    /// Left-to-right X scale over `[0, width]`.
    pub fn x(min: f64, max: f64, width: f64) -> QuadrantResult<Self> {
        Self::try_new([min, max], [0.0, width])
    }

    /// Inverted Y scale over `[height, 0]` so larger values plot higher.
    pub fn y(min: f64, max: f64, height: f64) -> QuadrantResult<Self> {
        Self::try_new([min, max], [height, 0.0])
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }
}
