use alloc::format;

use log::{debug, info};

use super::{Color, Description, Rectangle, Shape, ShapeKind};
use crate::error::ShapeError;

/// Square built on a [`Rectangle`] whose width and height are kept equal.
///
/// The inner rectangle is private, so the only way to change its sides is
/// [`Square::resize`], which always sets both.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Create a black square.
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        Self::with_color(side, Color::default())
    }

    pub fn with_color(side: f64, color: Color) -> Result<Self, ShapeError> {
        let rect = Rectangle::with_color(side, side, color).map_err(side_length)?;
        debug!("Created square with side length {side}");
        Ok(Self { rect })
    }

    pub fn side(&self) -> f64 {
        self.rect.width()
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn resize(&mut self, side: f64) -> Result<(), ShapeError> {
        self.rect.set_sides(side, side).map_err(side_length)?;
        info!("The side length of the square has been changed to: {}", self.side());
        Ok(())
    }
}

/// Report rectangle dimension errors under the square's own dimension name.
fn side_length(err: ShapeError) -> ShapeError {
    match err {
        ShapeError::InvalidDimension { value, .. } => ShapeError::InvalidDimension {
            name: "side length",
            value,
        },
        other => other,
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn color(&self) -> &Color {
        self.rect.color()
    }

    fn set_color(&mut self, color: Color) {
        self.rect.set_color(color);
    }

    fn area(&self) -> f64 {
        self.side() * self.side()
    }

    fn draw(&self) -> Description {
        Description::new(
            format!(
                "Drawing a square with side length {} and color: {}",
                self.side(),
                self.color()
            ),
            format!("Area of square: {}", self.area()),
        )
    }

    fn resize_dimensions(&mut self, dimensions: &[f64]) -> Result<(), ShapeError> {
        ShapeKind::Square.check_count(dimensions)?;
        self.resize(dimensions[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_stay_equal() {
        for s in [0.25, 1.0, 4.0, 99.5] {
            let mut square = Square::new(s).unwrap();
            assert_eq!(square.width(), s);
            assert_eq!(square.height(), s);
            assert_eq!(square.area(), s * s);

            square.resize(s * 3.0).unwrap();
            assert_eq!(square.width(), square.height());
            assert_eq!(square.side(), s * 3.0);
            assert_eq!(square.area(), (s * 3.0) * (s * 3.0));
        }
    }

    #[test]
    fn test_area_matches_rectangle_formula() {
        let square = Square::new(7.0).unwrap();
        assert_eq!(square.area(), square.width() * square.height());
    }

    #[test]
    fn test_green_square_resized_and_recolored() {
        let mut square = Square::with_color(4.0, Color::new("green").unwrap()).unwrap();
        assert_eq!(
            square.draw().headline(),
            "Drawing a square with side length 4 and color: green"
        );
        assert_eq!(square.draw().area_line(), "Area of square: 16");

        square.resize(6.0).unwrap();
        square.change_color("yellow").unwrap();
        let description = square.draw();

        assert_eq!(
            description.headline(),
            "Drawing a square with side length 6 and color: yellow"
        );
        assert_eq!(description.area_line(), "Area of square: 36");
    }

    #[test]
    fn test_invalid_side_reports_side_length() {
        assert!(matches!(
            Square::new(-4.0),
            Err(ShapeError::InvalidDimension {
                name: "side length",
                ..
            })
        ));

        let mut square = Square::new(4.0).unwrap();
        assert!(square.resize(0.0).is_err());
        assert_eq!(square.side(), 4.0);
        assert_eq!(square.height(), 4.0);
    }

    #[test]
    fn test_resize_dimensions_rejects_two_sides() {
        let mut square = Square::new(4.0).unwrap();
        assert!(matches!(
            square.resize_dimensions(&[5.0, 6.0]),
            Err(ShapeError::DimensionCount {
                kind: ShapeKind::Square,
                ..
            })
        ));
        assert_eq!(square.width(), square.height());
    }

    #[test]
    fn test_resize_logs_new_side() {
        let mut square = Square::new(4.0).unwrap();
        let lines = crate::test_log::capture(|| square.resize(6.0).unwrap());
        assert_eq!(lines, ["The side length of the square has been changed to: 6"]);
    }
}
