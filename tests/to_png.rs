#![cfg(feature = "host")]
#![allow(missing_docs)]
//! PNG previews are read back through the addressing engine.

use std::error::Error;
use std::fs::File;

use matrix_envoy::{
    NeoMatrix,
    color::{Rgb, color16},
    matrix::{Corner, MajorAxis, MatrixLayout, PanelOrdering, Rotation, Sequence},
    to_png::{write_matrix_png, write_matrix_png_with_gamma},
};

const SNAKE_4X2: MatrixLayout = MatrixLayout::single(
    4,
    2,
    PanelOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag),
);

struct DecodedPng {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl DecodedPng {
    fn open(path: &std::path::Path) -> Result<Self, Box<dyn Error>> {
        let mut decoder = png::Decoder::new(File::open(path)?);
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info()?;
        let mut bytes = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut bytes)?;
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(info.bit_depth, png::BitDepth::Sixteen);
        bytes.truncate(info.buffer_size());
        Ok(Self {
            width: info.width,
            height: info.height,
            bytes,
        })
    }

    /// 16-bit red channel at image pixel `(x, y)`.
    fn red(&self, x: u32, y: u32) -> u16 {
        let offset = ((y * self.width + x) * 6) as usize;
        u16::from_be_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    /// Image pixel at the center of logical cell `(column, row)` of a `columns × rows` canvas.
    fn cell_center(&self, columns: u32, rows: u32, column: u32, row: u32) -> (u32, u32) {
        let cell_size = (self.width - self.height) / (columns - rows);
        let border = (self.height - rows * cell_size) / 2;
        let center = (cell_size - 1) / 2;
        (
            border + column * cell_size + center,
            border + row * cell_size + center,
        )
    }
}

#[test]
fn png_fits_requested_size() -> Result<(), Box<dyn Error>> {
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("nested").join("matrix.png");
    let matrix = NeoMatrix::new([Rgb::default(); 8], SNAKE_4X2);

    write_matrix_png(&matrix, &path, 200)?;

    let decoded = DecodedPng::open(&path)?;
    assert!(decoded.width.max(decoded.height) <= 200);
    assert!(decoded.width > decoded.height);
    Ok(())
}

#[test]
fn png_shows_pixels_where_they_were_drawn() -> Result<(), Box<dyn Error>> {
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("lit.png");
    let mut matrix = NeoMatrix::new([Rgb::default(); 8], SNAKE_4X2);
    // (3, 1) sits on the reversed second row, so it lives at LED 4.
    matrix.draw_pixel(3, 1, color16(255, 0, 0));
    assert_eq!(matrix.leds()[4], Rgb::new(255, 0, 0));

    write_matrix_png_with_gamma(&matrix, &path, 120, 1.0)?;

    let decoded = DecodedPng::open(&path)?;
    let (lit_x, lit_y) = decoded.cell_center(4, 2, 3, 1);
    let (dark_x, dark_y) = decoded.cell_center(4, 2, 0, 1);
    assert_eq!(decoded.red(lit_x, lit_y), u16::MAX);
    assert_eq!(decoded.red(dark_x, dark_y), 0);
    Ok(())
}

#[test]
fn png_follows_rotation() -> Result<(), Box<dyn Error>> {
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("rotated.png");
    let mut matrix = NeoMatrix::new([Rgb::default(); 8], SNAKE_4X2);
    matrix.set_rotation(Rotation::Deg90);

    write_matrix_png(&matrix, &path, 160)?;

    let decoded = DecodedPng::open(&path)?;
    assert!(decoded.height > decoded.width);
    Ok(())
}
