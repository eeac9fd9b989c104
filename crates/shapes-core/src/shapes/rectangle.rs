use alloc::format;

use log::{debug, info};

use super::{Color, Description, Shape, ShapeKind};
use crate::error::{ShapeError, positive};

/// Rectangle with independently sized width and height
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    color: Color,
}

impl Rectangle {
    /// Create a black rectangle.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Self::with_color(width, height, Color::default())
    }

    pub fn with_color(width: f64, height: f64, color: Color) -> Result<Self, ShapeError> {
        let width = positive("width", width)?;
        let height = positive("height", height)?;
        debug!("Created rectangle {width}x{height} with color {color}");
        Ok(Self {
            width,
            height,
            color,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set both sides. Neither changes unless both are valid.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), ShapeError> {
        self.set_sides(width, height)?;
        info!(
            "The dimensions of the rectangle have been changed to: {}x{}",
            self.width, self.height
        );
        Ok(())
    }

    /// Validated resize without the confirmation log line.
    pub(super) fn set_sides(&mut self, width: f64, height: f64) -> Result<(), ShapeError> {
        let width = positive("width", width)?;
        let height = positive("height", height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn color(&self) -> &Color {
        &self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn draw(&self) -> Description {
        Description::new(
            format!(
                "Drawing a rectangle with width {}, height {}, and color: {}",
                self.width, self.height, self.color
            ),
            format!("Area of rectangle: {}", self.area()),
        )
    }

    fn resize_dimensions(&mut self, dimensions: &[f64]) -> Result<(), ShapeError> {
        ShapeKind::Rectangle.check_count(dimensions)?;
        self.resize(dimensions[0], dimensions[1])
    }
}
