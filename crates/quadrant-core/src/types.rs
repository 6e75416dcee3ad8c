// File: crates/quadrant-core/src/types.rs
// Summary: Data model and configuration defaults shared across the crate.

use serde::{Deserialize, Serialize};

/// Default artboard width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default artboard height in pixels.
pub const HEIGHT: f64 = 600.0;
/// Default shared domain minimum for both axes.
pub const DOMAIN_MIN: f64 = 0.0;
/// Default shared domain maximum for both axes.
pub const DOMAIN_MAX: f64 = 3.0;
/// Default artboard unit; padding (3x) and node radius (1x) derive from it.
pub const UNIT: f64 = 16.0;
/// Default chart name, used as the artboard class.
pub const NAME: &str = "quadrant-chart";

/// One plotted item. Identifier uniqueness is expected but not enforced;
/// duplicate ids collapse onto one visual element, last write wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub x: f64,
    pub y: f64,
}

/// Axis labels used to build the four corner annotation strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub x: String,
    pub y: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self { x: "x".to_string(), y: "y".to_string() }
    }
}

/// Construction-time configuration with explicit defaults. Replaces the
/// original's ambient environment lookups (computed font size, env vars).
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub min: f64,
    pub max: f64,
    pub labels: Labels,
    pub name: String,
    pub unit: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            min: DOMAIN_MIN,
            max: DOMAIN_MAX,
            labels: Labels::default(),
            name: NAME.to_string(),
            unit: UNIT,
        }
    }
}
