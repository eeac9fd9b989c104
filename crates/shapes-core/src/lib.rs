//! Platform-independent core library for solid-shapes
//!
//! This crate contains a small family of shapes (circle, rectangle, square)
//! built so new variants can be added without modifying existing ones, and
//! two robot components that each carry exactly one responsibility.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the demo binary and tests).

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod robot;
pub mod shapes;

#[cfg(test)]
mod test_log;

pub use config::Config;
pub use error::ShapeError;
pub use shapes::{
    AnyShape, Circle, Color, DEFAULT_COLOR, Description, Rectangle, Render, Shape, ShapeKind,
    Square, create, display_color,
};
