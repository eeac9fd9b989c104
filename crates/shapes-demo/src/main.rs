//! Desktop walkthrough of the shapes-core components.
//!
//! Creates a circle, a rectangle and a square, draws each one before and
//! after resizing and recoloring, then exercises the two robot components.
//! Everything is written through the `log` facade; set `RUST_LOG` to change
//! the verbosity (defaults to `info`).

use log::{error, info};

use shapes_core::robot::{RobotAuth, RobotSettings};
use shapes_core::{Config, Shape, ShapeError, ShapeKind};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Emit every line of a shape's description.
fn show(shape: &impl Shape) {
    for line in shape.draw().lines() {
        info!("{line}");
    }
}

// ---------------------------------------------------------------------------
// Walkthrough
// ---------------------------------------------------------------------------

fn run(config: &Config<'_>) -> Result<(), ShapeError> {
    let mut circle = config.create(ShapeKind::Circle, &[5.0], Some("red"))?;
    show(&circle);
    circle.resize(&[10.0])?;
    show(&circle);
    circle.change_color("blue")?;
    show(&circle);

    let mut rectangle = config.create(ShapeKind::Rectangle, &[4.0, 6.0], Some("blue"))?;
    show(&rectangle);
    rectangle.resize(&[8.0, 10.0])?;
    show(&rectangle);

    let mut square = config.create(ShapeKind::Square, &[4.0], Some("green"))?;
    show(&square);
    square.resize(&[6.0])?;
    show(&square);
    square.change_color("yellow")?;
    show(&square);

    RobotAuth::new().authorize();
    RobotSettings::new().update_settings();

    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting shapes demo");

    let config = Config::default();
    if let Err(e) = run(&config) {
        error!("Demo failed: {e}");
        std::process::exit(1);
    }

    info!("Shapes demo finished");
}
