// File: crates/quadrant-core/src/error.rs
// Summary: Typed error taxonomy for chart construction and rendering.

use thiserror::Error;

pub type QuadrantResult<T> = Result<T, QuadrantError>;

#[derive(Debug, Error)]
pub enum QuadrantError {
    #[error("invalid domain: min={min}, max={max} (min must be strictly below max)")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("required data collection is missing")]
    MissingData,

    #[error("chart is not bound to a host node; call render before update")]
    NotRendered,
}
