//! Shape colors
//!
//! A color is stored as its name, exactly as the caller spelled it.

use alloc::string::String;
use core::fmt;

use crate::error::ShapeError;

/// Color every shape gets when none is given at creation
pub const DEFAULT_COLOR: &str = "black";

/// Named, always non-empty shape color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    /// Store a color name. Any non-empty name is accepted.
    pub fn new(name: &str) -> Result<Self, ShapeError> {
        if name.is_empty() {
            return Err(ShapeError::EmptyColor);
        }
        Ok(Self(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.into())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
