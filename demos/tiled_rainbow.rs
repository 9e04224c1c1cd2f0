//! Render a rainbow onto four serpentine panels and save a PNG preview.
//!
//! Run with `cargo run --features host --bin demo_tiled_rainbow [output.png]`.

use std::error::Error;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
};
use matrix_envoy::{
    NeoMatrix,
    color::{Rgb, color_hsv},
    matrix::{Corner, MajorAxis, MatrixLayout, PanelOrdering, Rotation, Sequence, TileOrdering},
    to_png::write_matrix_png,
};

// Four 8×8 panels in a 2×2 grid. Each panel is a snake of LEDs running down its columns;
// the panels are chained left to right, and the second row of panels is upside down.
const LAYOUT: MatrixLayout = MatrixLayout::tiled(
    8,
    8,
    2,
    2,
    TileOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag),
    PanelOrdering::new(Corner::TopLeft, MajorAxis::Columns, Sequence::Zigzag),
);

fn main() -> Result<(), Box<dyn Error>> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tiled_rainbow.png".to_owned());

    let mut matrix = NeoMatrix::try_new([Rgb::default(); LAYOUT.led_count()], LAYOUT)?;
    // The panels hang sideways.
    matrix.set_rotation(Rotation::Deg90);

    // Diagonal rainbow: hue advances with x + y and wraps around the color wheel.
    let width = matrix.width() as i32;
    let height = matrix.height() as i32;
    let hue_step = u16::MAX / (width + height) as u16;
    for y in 0..height {
        for x in 0..width {
            let hue = hue_step.wrapping_mul((x + y) as u16);
            matrix.draw_pixel(x, y, color_hsv(hue, 255, 160));
        }
    }

    // A white ring on top, drawn through embedded-graphics.
    Circle::new(Point::new(3, 3), 10)
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
        .draw(&mut matrix)?;

    // The passthrough color skips gamma: a raw dim-blue center dot.
    matrix.set_passthrough(Some(Rgb::new(0, 0, 40)));
    matrix.draw_pixel(7, 7, 0);
    matrix.draw_pixel(8, 8, 0);
    matrix.clear_passthrough();

    write_matrix_png(&matrix, &output_path, 400)
}
