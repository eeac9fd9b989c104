use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::shapes::{AnyShape, Color, DEFAULT_COLOR, ShapeKind};

/// Library-wide settings
///
/// Serialized with postcard so a caller can ship it alongside other
/// binary configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(bound(deserialize = "'de: 'a"))]
pub struct Config<'a> {
    /// Color given to shapes created without one
    pub default_color: &'a str,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR,
        }
    }
}

impl<'a> Config<'a> {
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ShapeError> {
        postcard::from_bytes(bytes).map_err(ShapeError::Config)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ShapeError> {
        postcard::to_allocvec(self).map_err(ShapeError::Config)
    }

    /// Same as [`crate::create`], but falls back to this config's default color.
    pub fn create(
        &self,
        kind: ShapeKind,
        dimensions: &[f64],
        color: Option<&str>,
    ) -> Result<AnyShape, ShapeError> {
        let color = Color::new(color.unwrap_or(self.default_color))?;
        AnyShape::build(kind, dimensions, color)
    }
}
