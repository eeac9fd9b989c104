//! Shape abstraction and the closed set of built-in variants.
//!
//! This module defines the [`Shape`] trait that every shape implements, along
//! with [`AnyShape`], an enum wrapper over the built-in variants that lets the
//! [`create`] factory hand back any of them without boxing.
//!
//! # Shape Trait
//!
//! [`Shape`] is the capability set shared by all variants: describe itself
//! ([`Shape::draw`]), compute its area, resize, and change color. A new
//! variant only needs a new type implementing the trait; the existing ones
//! stay untouched.
//!
//! # AnyShape
//!
//! [`AnyShape`] delegates every [`Shape`] and [`Render`] method to the inner
//! variant. [`Render`] is generic over the display and therefore not
//! object-safe, so collections that also need rendering store `AnyShape`
//! instead of `Box<dyn Shape>`.
//!
//! # Examples
//!
//! ```ignore
//! let mut square = create(ShapeKind::Square, &[4.0], Some("green"))?;
//! square.resize(&[6.0])?;
//! square.change_color("yellow")?;
//! log::info!("{}", square.draw());
//! ```

use alloc::string::String;
use core::fmt;

use log::info;

use crate::error::ShapeError;

mod circle;
mod color;
mod rectangle;
mod render;
mod square;

pub use circle::Circle;
pub use color::{Color, DEFAULT_COLOR};
pub use rectangle::Rectangle;
pub use render::{FALLBACK_RGB, Render, display_color};
pub use square::Square;

// ---------------------------------------------------------------------------
// Shape kind
// ---------------------------------------------------------------------------

/// Identifies a built-in shape variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl ShapeKind {
    /// Lowercase name used in descriptions
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
        }
    }

    /// Number of dimensions the variant is created and resized with
    pub const fn dimension_count(self) -> usize {
        match self {
            Self::Circle | Self::Square => 1,
            Self::Rectangle => 2,
        }
    }

    /// Fail unless `dimensions` holds exactly as many values as this kind needs.
    pub(crate) fn check_count(self, dimensions: &[f64]) -> Result<(), ShapeError> {
        let expected = self.dimension_count();
        if dimensions.len() == expected {
            Ok(())
        } else {
            Err(ShapeError::DimensionCount {
                kind: self,
                expected,
                got: dimensions.len(),
            })
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Description
// ---------------------------------------------------------------------------

/// Human-readable output of [`Shape::draw`]
///
/// Two lines: a headline naming the kind, dimensions and color, and a line
/// with the computed area. `Display` joins them with a newline.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    headline: String,
    area_line: String,
}

impl Description {
    pub fn new(headline: String, area_line: String) -> Self {
        Self {
            headline,
            area_line,
        }
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn area_line(&self) -> &str {
        &self.area_line
    }

    /// Both lines in output order
    pub fn lines(&self) -> [&str; 2] {
        [self.headline.as_str(), self.area_line.as_str()]
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.headline, self.area_line)
    }
}

// ---------------------------------------------------------------------------
// Shape trait
// ---------------------------------------------------------------------------

/// Capabilities shared by every shape.
pub trait Shape {
    fn kind(&self) -> ShapeKind;

    fn color(&self) -> &Color;

    /// Replace the color without logging; prefer [`Shape::change_color`].
    fn set_color(&mut self, color: Color);

    /// Exact geometric area.
    fn area(&self) -> f64;

    /// Describe the shape. Pure: the caller decides where the text goes.
    fn draw(&self) -> Description;

    /// Resize from a slice holding [`ShapeKind::dimension_count`] values.
    ///
    /// On error the shape is left unchanged.
    fn resize_dimensions(&mut self, dimensions: &[f64]) -> Result<(), ShapeError>;

    /// Validate `name` and make it the shape's color.
    fn change_color(&mut self, name: &str) -> Result<(), ShapeError> {
        let color = Color::new(name)?;
        self.set_color(color);
        info!(
            "The color of the shape has been changed to: {}",
            self.color()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// AnyShape
// ---------------------------------------------------------------------------

/// One of the built-in shape variants
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Circle(Circle),
    Rectangle(Rectangle),
    Square(Square),
}

impl AnyShape {
    /// Build the variant for `kind` from raw dimensions.
    pub fn build(kind: ShapeKind, dimensions: &[f64], color: Color) -> Result<Self, ShapeError> {
        kind.check_count(dimensions)?;

        let shape = match kind {
            ShapeKind::Circle => Self::Circle(Circle::with_color(dimensions[0], color)?),
            ShapeKind::Rectangle => Self::Rectangle(Rectangle::with_color(
                dimensions[0],
                dimensions[1],
                color,
            )?),
            ShapeKind::Square => Self::Square(Square::with_color(dimensions[0], color)?),
        };
        Ok(shape)
    }

    /// Resize from raw dimensions; see [`Shape::resize_dimensions`].
    pub fn resize(&mut self, dimensions: &[f64]) -> Result<(), ShapeError> {
        self.resize_dimensions(dimensions)
    }

    fn inner(&self) -> &dyn Shape {
        match self {
            Self::Circle(c) => c,
            Self::Rectangle(r) => r,
            Self::Square(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Shape {
        match self {
            Self::Circle(c) => c,
            Self::Rectangle(r) => r,
            Self::Square(s) => s,
        }
    }
}

impl Shape for AnyShape {
    fn kind(&self) -> ShapeKind {
        self.inner().kind()
    }

    fn color(&self) -> &Color {
        self.inner().color()
    }

    fn set_color(&mut self, color: Color) {
        self.inner_mut().set_color(color)
    }

    fn area(&self) -> f64 {
        self.inner().area()
    }

    fn draw(&self) -> Description {
        self.inner().draw()
    }

    fn resize_dimensions(&mut self, dimensions: &[f64]) -> Result<(), ShapeError> {
        self.inner_mut().resize_dimensions(dimensions)
    }
}

impl From<Circle> for AnyShape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rectangle> for AnyShape {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Square> for AnyShape {
    fn from(square: Square) -> Self {
        Self::Square(square)
    }
}

/// Create a shape of the given kind.
///
/// `dimensions` holds the radius for a circle, width and height for a
/// rectangle, or the side length for a square. `color` defaults to
/// [`DEFAULT_COLOR`].
pub fn create(
    kind: ShapeKind,
    dimensions: &[f64],
    color: Option<&str>,
) -> Result<AnyShape, ShapeError> {
    let color = match color {
        Some(name) => Color::new(name)?,
        None => Color::default(),
    };
    AnyShape::build(kind, dimensions, color)
}
