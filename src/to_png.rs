#![cfg(feature = "host")]
//! Host-side PNG previews of a matrix, for docs and wiring checks.
//!
//! Pixels are read back from the LED buffer *through* the addressing engine, so a layout
//! that does not match the real wiring shows up as a scrambled image.

use crate::color::Rgb;
use crate::led_strip::LedBuffer;
use crate::matrix::NeoMatrix;
use png::{BitDepth, ColorType, Encoder, ScaledFloat};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::num::TryFromIntError;
use std::path::Path;

const PREVIEW_INVERSE_GAMMA: f32 = 2.2;

/// Render the logical canvas of `matrix` into a PNG sized to the requested maximum dimension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn write_matrix_png<B: LedBuffer>(
    matrix: &NeoMatrix<'_, B>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<(), Box<dyn Error>> {
    write_matrix_png_with_gamma(matrix, output_path, target_max_dimension, PREVIEW_INVERSE_GAMMA)
}

/// Render the logical canvas of `matrix` into a PNG with a custom preview inverse gamma.
///
/// LED colors are gamma-encoded for the LEDs; the preview undoes that with
/// `preview_inverse_gamma` so the image looks like the lit panel.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn write_matrix_png_with_gamma<B: LedBuffer>(
    matrix: &NeoMatrix<'_, B>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    preview_inverse_gamma: f32,
) -> Result<(), Box<dyn Error>> {
    assert!(preview_inverse_gamma > 0.0, "preview_inverse_gamma must be positive");
    let output_path = output_path.as_ref();
    let canvas = Canvas::read(matrix)?;
    let cell_size = select_cell_size(canvas.width, canvas.height, target_max_dimension);
    let led_margin = (cell_size / 8).max(1);
    let (width, height, pixels) = canvas.pixels(cell_size, led_margin, preview_inverse_gamma);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    println!("wrote PNG to {}", output_path.display());
    Ok(())
}

/// Logical pixels of a matrix in row-major order. Unmapped pixels read as black.
struct Canvas {
    width: u32,
    height: u32,
    colors: Vec<Rgb>,
}

impl Canvas {
    fn read<B: LedBuffer>(matrix: &NeoMatrix<'_, B>) -> Result<Self, TryFromIntError> {
        let width = u32::try_from(matrix.width())?;
        let height = u32::try_from(matrix.height())?;
        let mut colors = Vec::with_capacity(matrix.width() * matrix.height());
        for y in 0..matrix.height() {
            for x in 0..matrix.width() {
                let color = i32::try_from(x)
                    .ok()
                    .zip(i32::try_from(y).ok())
                    .and_then(|(x, y)| matrix.led_index(x, y))
                    .and_then(|index| matrix.leds().pixel_color(index))
                    .unwrap_or_default();
                colors.push(color);
            }
        }
        Ok(Self {
            width,
            height,
            colors,
        })
    }

    /// Draw each pixel as a soft-edged round LED; returns `(width, height, rgb16_bytes)`.
    fn pixels(&self, cell_size: u32, led_margin: u32, preview_inverse_gamma: f32) -> (u32, u32, Vec<u8>) {
        assert!(cell_size > 0, "cell_size must be positive");
        assert!(led_margin < cell_size / 2, "led_margin must fit inside cell");
        let led_radius = (cell_size - (led_margin * 2)) / 2;
        assert!(led_radius > 0, "led_radius must be positive");
        let fade_width = (led_radius / 3).max(1);

        let border = led_radius;
        let width = self.width * cell_size + border * 2;
        let height = self.height * cell_size + border * 2;
        let mut bytes = vec![0u8; (width * height * 3 * 2) as usize];
        let center = (cell_size - 1) as i32 / 2;
        let led_radius_f = led_radius as f32;
        let inner_radius_f = led_radius.saturating_sub(fade_width) as f32;
        let radius_sq = (led_radius as i32) * (led_radius as i32);

        for (pixel_index, color) in self.colors.iter().enumerate() {
            let column_index = pixel_index as u32 % self.width;
            let row_index = pixel_index as u32 / self.width;
            let cell_origin_x = column_index * cell_size;
            let cell_origin_y = row_index * cell_size;
            let linear = [color.r, color.g, color.b]
                .map(|channel| inverse_gamma_to_linear(channel, preview_inverse_gamma));

            for local_y in 0..cell_size {
                let delta_y = local_y as i32 - center;
                for local_x in 0..cell_size {
                    let delta_x = local_x as i32 - center;
                    let distance_sq = delta_x * delta_x + delta_y * delta_y;
                    if distance_sq > radius_sq {
                        continue;
                    }
                    let distance = (distance_sq as f32).sqrt();
                    let intensity = if distance <= inner_radius_f {
                        1.0
                    } else {
                        let fade_span = led_radius_f - inner_radius_f;
                        (1.0 - (distance - inner_radius_f) / fade_span).max(0.0)
                    };
                    let x = border + cell_origin_x + local_x;
                    let y = border + cell_origin_y + local_y;
                    let byte_index = ((y * width + x) * 3 * 2) as usize;
                    for (channel_index, channel) in linear.iter().enumerate() {
                        let value = linear_to_u16(channel * intensity);
                        let offset = byte_index + channel_index * 2;
                        bytes[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
                    }
                }
            }
        }

        (width, height, bytes)
    }
}

fn select_cell_size(canvas_width: u32, canvas_height: u32, target_max_dimension: u32) -> u32 {
    assert!(target_max_dimension > 0, "target_max_dimension must be positive");
    let mut cell_size = target_max_dimension;
    while cell_size > 4 {
        let led_margin = (cell_size / 8).max(1);
        let led_radius = (cell_size - (led_margin * 2)) / 2;
        let output_width = canvas_width * cell_size + led_radius * 2;
        let output_height = canvas_height * cell_size + led_radius * 2;
        if output_width.max(output_height) <= target_max_dimension {
            break;
        }
        cell_size -= 1;
    }
    cell_size.max(4)
}

fn inverse_gamma_to_linear(channel: u8, preview_inverse_gamma: f32) -> f32 {
    let normalized = f32::from(channel) / 255.0;
    normalized.powf(preview_inverse_gamma)
}

fn linear_to_u16(value: f32) -> u16 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 65535.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_fits_target() {
        let cell_size = select_cell_size(16, 8, 200);
        let led_radius = (cell_size - (cell_size / 8).max(1) * 2) / 2;
        assert!(16 * cell_size + led_radius * 2 <= 200);
    }

    #[test]
    fn tiny_targets_keep_a_drawable_cell() {
        assert_eq!(select_cell_size(64, 64, 10), 4);
    }
}
