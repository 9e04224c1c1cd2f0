//! A drawing surface for single or tiled NeoPixel-style (WS2812) LED matrices.
//!
//! [`NeoMatrix`] implements the [`embedded-graphics`](https://docs.rs/embedded-graphics)
//! [`DrawTarget`] trait with [`Rgb565`] colors. Every pixel goes through the same steps:
//!
//! 1. drop it if it is outside the (rotated) canvas,
//! 2. undo the [`Rotation`],
//! 3. find its LED, either with a caller-supplied [`Remap`] or from the
//!    [`MatrixLayout`] (tile first, then the pixel inside the panel),
//! 4. write the passthrough color if one is latched, otherwise the gamma-expanded
//!    16-bit color.
//!
//! # Example: Tiled Panels
//!
//! Four 8×8 panels in a 2×2 grid. The panels are chained in a serpentine, so the second
//! row of panels is mounted upside down.
//!
//! ```rust
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
//! use matrix_envoy::{
//!     NeoMatrix,
//!     color::{Rgb, color16, expand_color},
//!     matrix::layout::{Corner, MajorAxis, MatrixLayout, PanelOrdering, Sequence, TileOrdering},
//! };
//!
//! const LAYOUT: MatrixLayout = MatrixLayout::tiled(
//!     8,
//!     8,
//!     2,
//!     2,
//!     TileOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag),
//!     PanelOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Progressive),
//! );
//!
//! let mut matrix = NeoMatrix::new([Rgb::default(); LAYOUT.led_count()], LAYOUT);
//! assert_eq!(matrix.size(), Size::new(16, 16));
//!
//! Line::new(Point::new(0, 15), Point::new(15, 15))
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::RED, 1))
//!     .draw(&mut matrix)
//!     .expect("drawing never fails");
//!
//! // The bottom-right pixel is the first LED of the third (upside-down) panel.
//! assert_eq!(matrix.led_index(15, 15), Some(128));
//! assert_eq!(matrix.leds()[128], expand_color(color16(255, 0, 0)));
//! ```

pub mod layout;
pub mod rotation;

pub use layout::{Corner, MajorAxis, MatrixLayout, PanelOrdering, Sequence, TileOrdering};
pub use rotation::Rotation;

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb565,
};

use crate::Result;
use crate::color::{GAMMA_DEFAULT, Gamma, Rgb, expand_color_with, rgb565_to_color16};
use crate::error::Error;
use crate::led_strip::LedBuffer;

/// Custom mapping from unrotated canvas coordinates to LED indexes.
///
/// Use this for wiring that [`MatrixLayout`] cannot describe. Closures
/// `Fn(u16, u16) -> usize` implement it directly.
///
/// The returned index is used as is. Indexes past the end of the buffer are handled by
/// the buffer (the ones in this crate ignore them).
///
/// ```rust
/// use matrix_envoy::{NeoMatrix, color::Rgb, matrix::{MatrixLayout, PanelOrdering, Remap}};
///
/// // A 4×1 strip wired from the middle outwards.
/// struct CenterOut;
///
/// impl Remap for CenterOut {
///     fn resolve(&self, x: u16, _y: u16) -> usize {
///         [3, 1, 0, 2][usize::from(x)]
///     }
/// }
///
/// let mut matrix = NeoMatrix::new(
///     [Rgb::default(); 4],
///     MatrixLayout::single(4, 1, PanelOrdering::default()),
/// );
/// matrix.set_remap(Some(&CenterOut));
/// assert_eq!(matrix.led_index(0, 0), Some(3));
/// ```
pub trait Remap {
    /// LED index for unrotated canvas coordinate `(x, y)`.
    fn resolve(&self, x: u16, y: u16) -> usize;
}

impl<F> Remap for F
where
    F: Fn(u16, u16) -> usize,
{
    fn resolve(&self, x: u16, y: u16) -> usize {
        self(x, y)
    }
}

/// A rectangular LED matrix (one panel or a grid of panels) over an [`LedBuffer`].
///
/// See the [module documentation](mod@crate::matrix) for an example.
///
/// Rotation, passthrough color and remap are plain fields of the matrix and are read
/// on every pixel write. Passthrough is never cleared automatically: call
/// [`clear_passthrough`](Self::clear_passthrough) when done with it.
pub struct NeoMatrix<'r, B> {
    leds: B,
    layout: MatrixLayout,
    rotation: Rotation,
    gamma: Gamma,
    passthrough: Option<Rgb>,
    remap: Option<&'r dyn Remap>,
}

impl<'r, B: LedBuffer> NeoMatrix<'r, B> {
    /// Create a matrix that writes into `leds` according to `layout`.
    ///
    /// The layout is not checked against the buffer; mismatched sizes lead to writes
    /// that the buffer ignores, and pixels past `u16` coordinates are never addressed.
    /// Use [`try_new`](Self::try_new) to check.
    #[must_use]
    pub fn new(leds: B, layout: MatrixLayout) -> Self {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "NeoMatrix::new: {}x{} canvas, {} LEDs",
            layout.width(),
            layout.height(),
            layout.led_count()
        );
        Self {
            leds,
            layout,
            rotation: Rotation::Deg0,
            gamma: GAMMA_DEFAULT,
            passthrough: None,
            remap: None,
        }
    }

    /// Create a matrix after checking that `layout` fits `leds`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyPanel`] if the panel width or height is zero.
    /// - [`Error::CanvasTooLarge`] if the canvas is wider or taller than `u16::MAX`.
    /// - [`Error::LedCountMismatch`] if the buffer length differs from the layout's LED count.
    pub fn try_new(leds: B, layout: MatrixLayout) -> Result<Self> {
        if layout.panel_width() == 0 || layout.panel_height() == 0 {
            return Err(Error::EmptyPanel);
        }
        if layout.width() > usize::from(u16::MAX) || layout.height() > usize::from(u16::MAX) {
            return Err(Error::CanvasTooLarge);
        }
        if layout.led_count() != leds.len() {
            return Err(Error::LedCountMismatch {
                expected: layout.led_count(),
                actual: leds.len(),
            });
        }
        Ok(Self::new(leds, layout))
    }

    /// Geometry and wiring of the matrix.
    #[must_use]
    pub const fn layout(&self) -> &MatrixLayout {
        &self.layout
    }

    /// The LED buffer.
    #[must_use]
    pub const fn leds(&self) -> &B {
        &self.leds
    }

    /// The LED buffer, for direct edits or to hand to a strip driver.
    pub const fn leds_mut(&mut self) -> &mut B {
        &mut self.leds
    }

    /// Give back the LED buffer.
    #[must_use]
    pub fn into_leds(self) -> B {
        self.leds
    }

    /// Current rotation.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Rotate the logical canvas. Width and height swap for 90° and 270°.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        #[cfg(feature = "defmt")]
        defmt::debug!("NeoMatrix::set_rotation: {}", rotation);
        self.rotation = rotation;
    }

    /// Logical width under the current rotation.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.rotation
            .dimensions(self.layout.width(), self.layout.height())
            .0
    }

    /// Logical height under the current rotation.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.rotation
            .dimensions(self.layout.width(), self.layout.height())
            .1
    }

    /// Curve used to widen 16-bit colors.
    #[must_use]
    pub const fn gamma(&self) -> Gamma {
        self.gamma
    }

    /// Choose the curve used to widen 16-bit colors (default [`Gamma::Gamma2_6`]).
    pub fn set_gamma(&mut self, gamma: Gamma) {
        self.gamma = gamma;
    }

    /// Latched passthrough color, if any.
    #[must_use]
    pub const fn passthrough(&self) -> Option<Rgb> {
        self.passthrough
    }

    /// Latch a raw 24-bit color that replaces the drawing color of every following write,
    /// or `None` to go back to normal color expansion.
    ///
    /// Passthrough colors skip gamma correction. They stay latched until changed.
    pub fn set_passthrough(&mut self, color: Option<Rgb>) {
        #[cfg(feature = "defmt")]
        defmt::debug!("NeoMatrix::set_passthrough: {}", color.is_some());
        self.passthrough = color;
    }

    /// Go back to normal color expansion. Same as `set_passthrough(None)`.
    pub fn clear_passthrough(&mut self) {
        self.set_passthrough(None);
    }

    /// Replace layout-based addressing with `remap`, or restore it with `None`.
    pub fn set_remap(&mut self, remap: Option<&'r dyn Remap>) {
        #[cfg(feature = "defmt")]
        defmt::info!("NeoMatrix::set_remap: custom mapping {}", remap.is_some());
        self.remap = remap;
    }

    /// Whether a custom [`Remap`] is in use.
    #[must_use]
    pub const fn has_remap(&self) -> bool {
        self.remap.is_some()
    }

    /// LED index for logical `(x, y)` under the current rotation and remap, or `None` if
    /// the coordinate is off the canvas.
    #[must_use]
    pub fn led_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width() || y >= self.height() {
            return None;
        }

        let (canvas_x, canvas_y) =
            self.rotation
                .apply(x, y, self.layout.width(), self.layout.height());
        // Canvases wider or taller than u16 coordinates keep their far pixels unaddressed.
        let canvas_x = u16::try_from(canvas_x).ok()?;
        let canvas_y = u16::try_from(canvas_y).ok()?;

        Some(match self.remap {
            Some(remap) => remap.resolve(canvas_x, canvas_y),
            None => self.layout.led_index_unchecked(canvas_x, canvas_y),
        })
    }

    /// 24-bit color that a write of `color` produces right now.
    #[must_use]
    pub const fn effective_color(&self, color: u16) -> Rgb {
        match self.passthrough {
            Some(raw) => raw,
            None => expand_color_with(color, self.gamma),
        }
    }

    /// Set the pixel at logical `(x, y)` to 16-bit `color`.
    ///
    /// Coordinates outside the rotated canvas are ignored.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: u16) {
        if let Some(index) = self.led_index(x, y) {
            let color = self.effective_color(color);
            self.leds.set_pixel_color(index, color);
        }
    }

    /// Set every LED to 16-bit `color` (or the passthrough color).
    ///
    /// Every LED belongs to exactly one pixel, so this skips addressing entirely.
    pub fn fill_all(&mut self, color: u16) {
        let color = self.effective_color(color);
        for index in 0..self.leds.len() {
            self.leds.set_pixel_color(index, color);
        }
    }
}

impl<B: LedBuffer> OriginDimensions for NeoMatrix<'_, B> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<B: LedBuffer> DrawTarget for NeoMatrix<'_, B> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.draw_pixel(coord.x, coord.y, rgb565_to_color16(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> core::result::Result<(), Self::Error> {
        self.fill_all(rgb565_to_color16(color));
        Ok(())
    }
}
