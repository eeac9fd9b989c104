use alloc::format;
use core::f64::consts::PI;

use log::{debug, info};

use super::{Color, Description, Shape, ShapeKind};
use crate::error::{ShapeError, positive};

/// Circle with a positive radius
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
    color: Color,
}

impl Circle {
    /// Create a black circle.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Self::with_color(radius, Color::default())
    }

    pub fn with_color(radius: f64, color: Color) -> Result<Self, ShapeError> {
        let radius = positive("radius", radius)?;
        debug!("Created circle with radius {radius} and color {color}");
        Ok(Self { radius, color })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn resize(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = positive("radius", radius)?;
        info!("The radius of the circle has been changed to: {}", self.radius);
        Ok(())
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn color(&self) -> &Color {
        &self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn draw(&self) -> Description {
        Description::new(
            format!(
                "Drawing a circle with radius {} and color: {}",
                self.radius, self.color
            ),
            format!("Area of circle: {}", self.area()),
        )
    }

    fn resize_dimensions(&mut self, dimensions: &[f64]) -> Result<(), ShapeError> {
        ShapeKind::Circle.check_count(dimensions)?;
        self.resize(dimensions[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_pi_r_squared() {
        for r in [0.5, 1.0, 2.5, 5.0, 10.0, 123.456] {
            let circle = Circle::new(r).unwrap();
            assert!((circle.area() - PI * r * r).abs() < 1e-9 * r * r);
        }
    }

    #[test]
    fn test_draw_red_circle() {
        let circle = Circle::with_color(5.0, Color::new("red").unwrap()).unwrap();
        let description = circle.draw();

        assert_eq!(
            description.headline(),
            "Drawing a circle with radius 5 and color: red"
        );
        assert_eq!(description.area_line(), "Area of circle: 78.53981633974483");
        assert!((circle.area() - 78.5398).abs() < 1e-4);
    }

    #[test]
    fn test_resize_keeps_color() {
        let mut circle = Circle::new(5.0).unwrap();
        circle.resize(10.0).unwrap();

        let description = circle.draw();
        assert_eq!(
            description.headline(),
            "Drawing a circle with radius 10 and color: black"
        );
        assert_eq!(description.area_line(), "Area of circle: 314.1592653589793");
        assert!((circle.area() - 314.1593).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_radius_is_rejected() {
        assert!(Circle::new(0.0).is_err());
        assert!(Circle::new(-3.0).is_err());

        let mut circle = Circle::new(2.0).unwrap();
        assert!(circle.resize(-1.0).is_err());
        assert_eq!(circle.radius(), 2.0);
    }

    #[test]
    fn test_resize_dimensions_takes_one_value() {
        let mut circle = Circle::new(2.0).unwrap();
        assert!(circle.resize_dimensions(&[3.0, 4.0]).is_err());
        circle.resize_dimensions(&[3.0]).unwrap();
        assert_eq!(circle.radius(), 3.0);
    }

    #[test]
    fn test_resize_logs_new_radius() {
        let mut circle = Circle::new(5.0).unwrap();
        let lines = crate::test_log::capture(|| circle.resize(10.0).unwrap());
        assert_eq!(lines, ["The radius of the circle has been changed to: 10"]);
    }
}
