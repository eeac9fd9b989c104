//! Rasterising shapes onto an RGB565 display
//!
//! Dimensions are rounded to whole pixels: a circle becomes a filled disc of
//! diameter `2 * radius`, rectangles and squares become filled boxes. The fill
//! comes from a small table of well-known color names; anything else is
//! drawn in [`FALLBACK_RGB`].
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::Drawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle as EgCircle, PrimitiveStyle, Rectangle as EgRectangle,
};

use super::{AnyShape, Circle, Color, Rectangle, Shape, Square};

/// Fill used when a color name has no known RGB565 value
pub const FALLBACK_RGB: Rgb565 = Rgb565::new(16, 32, 16);

/// Well-known color names and their display colors
const NAMED_COLORS: [(&str, Rgb565); 12] = [
    ("black", Rgb565::BLACK),
    ("white", Rgb565::WHITE),
    ("red", Rgb565::RED),
    ("green", Rgb565::GREEN),
    ("blue", Rgb565::BLUE),
    ("yellow", Rgb565::YELLOW),
    ("cyan", Rgb565::CYAN),
    ("magenta", Rgb565::MAGENTA),
    ("gray", FALLBACK_RGB),
    ("grey", FALLBACK_RGB),
    ("orange", Rgb565::new(255 >> 3, 165 >> 2, 0)),
    ("purple", Rgb565::new(128 >> 3, 0, 128 >> 3)),
];

/// Trait for shapes that can be drawn to a display
pub trait Render {
    /// Draw the shape, filled, with its bounding box anchored at `top_left`
    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        top_left: Point,
    ) -> Result<(), D::Error>;

    /// Pixel area covered when rendered at `top_left`
    fn pixel_bounds(&self, top_left: Point) -> EgRectangle;
}

/// Round a positive dimension to whole pixels.
#[inline]
fn to_px(value: f64) -> u32 {
    // `as` saturates, so huge shapes clamp instead of wrapping
    (value + 0.5) as u32
}

/// Display color for a shape color, ignoring ASCII case.
pub fn display_color(color: &Color) -> Rgb565 {
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color.as_str()))
        .map(|(_, rgb)| *rgb)
        .unwrap_or(FALLBACK_RGB)
}

fn fill_style(color: &Color) -> PrimitiveStyle<Rgb565> {
    PrimitiveStyle::with_fill(display_color(color))
}

impl Circle {
    fn primitive(&self, top_left: Point) -> EgCircle {
        EgCircle::new(top_left, to_px(2.0 * self.radius()))
    }
}

impl Render for Circle {
    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        top_left: Point,
    ) -> Result<(), D::Error> {
        self.primitive(top_left)
            .into_styled(fill_style(self.color()))
            .draw(display)
    }

    fn pixel_bounds(&self, top_left: Point) -> EgRectangle {
        self.primitive(top_left).bounding_box()
    }
}

impl Render for Rectangle {
    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        top_left: Point,
    ) -> Result<(), D::Error> {
        self.pixel_bounds(top_left)
            .into_styled(fill_style(self.color()))
            .draw(display)
    }

    fn pixel_bounds(&self, top_left: Point) -> EgRectangle {
        EgRectangle::new(
            top_left,
            Size::new(to_px(self.width()), to_px(self.height())),
        )
    }
}

impl Render for Square {
    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        top_left: Point,
    ) -> Result<(), D::Error> {
        self.pixel_bounds(top_left)
            .into_styled(fill_style(self.color()))
            .draw(display)
    }

    fn pixel_bounds(&self, top_left: Point) -> EgRectangle {
        let side = to_px(self.side());
        EgRectangle::new(top_left, Size::new(side, side))
    }
}

impl Render for AnyShape {
    fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        top_left: Point,
    ) -> Result<(), D::Error> {
        match self {
            AnyShape::Circle(c) => c.render(display, top_left),
            AnyShape::Rectangle(r) => r.render(display, top_left),
            AnyShape::Square(s) => s.render(display, top_left),
        }
    }

    fn pixel_bounds(&self, top_left: Point) -> EgRectangle {
        match self {
            AnyShape::Circle(c) => c.pixel_bounds(top_left),
            AnyShape::Rectangle(r) => r.pixel_bounds(top_left),
            AnyShape::Square(s) => s.pixel_bounds(top_left),
        }
    }
}
