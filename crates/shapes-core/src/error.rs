//! Error types for shape construction, mutation and configuration loading

use thiserror_no_std::Error;

use crate::shapes::ShapeKind;

/// Errors returned by the shape library
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A dimension was zero, negative, NaN or infinite
    #[error("invalid {name}: {value} (must be a positive number)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// The number of dimensions does not match the shape kind
    #[error("a {kind} takes {expected} dimension(s), got {got}")]
    DimensionCount {
        kind: ShapeKind,
        expected: usize,
        got: usize,
    },

    #[error("color must not be empty")]
    EmptyColor,

    /// A serialized [`Config`](crate::Config) could not be encoded or decoded
    #[error("config error: {0}")]
    Config(postcard::Error),
}

/// Check that a dimension is a finite, strictly positive number.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { name, value })
    }
}
