//! One-dimensional LED buffers that a [`NeoMatrix`](crate::matrix::NeoMatrix) writes into.
//!
//! The matrix only needs two things from a buffer: how many LEDs it holds and a way to set
//! one of them. [`LedBuffer`] captures that. It is implemented for plain arrays and slices
//! of [`Rgb`], for [`Frame1d`], and for mutable references to any buffer, so a matrix can
//! either own its LEDs or borrow them from whatever drives the strip.
//!
//! Sending the buffer to the physical LEDs (timing, DMA, power limits) is the job of the
//! strip driver, not this crate.

use core::ops::{Deref, DerefMut};

use crate::color::Rgb;

/// Storage for the colors of a one-dimensional LED string.
///
/// Writes past the end are ignored, matching NeoPixel-style drivers.
pub trait LedBuffer {
    /// Number of LEDs in the buffer.
    fn len(&self) -> usize;

    /// Set the color of the LED at `index`. Out-of-range indexes are ignored.
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Color of the LED at `index`, or `None` if out of range.
    fn pixel_color(&self, index: usize) -> Option<Rgb>;

    /// Whether the buffer holds no LEDs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LedBuffer for [Rgb] {
    fn len(&self) -> usize {
        <[Rgb]>::len(self)
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.get_mut(index) {
            *slot = color;
        }
    }

    fn pixel_color(&self, index: usize) -> Option<Rgb> {
        self.get(index).copied()
    }
}

impl<const N: usize> LedBuffer for [Rgb; N] {
    fn len(&self) -> usize {
        N
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.as_mut_slice().set_pixel_color(index, color);
    }

    fn pixel_color(&self, index: usize) -> Option<Rgb> {
        self.as_slice().pixel_color(index)
    }
}

impl<B: LedBuffer + ?Sized> LedBuffer for &mut B {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel_color(index, color);
    }

    fn pixel_color(&self, index: usize) -> Option<Rgb> {
        (**self).pixel_color(index)
    }
}

/// Fixed-size 1D LED strip frame.
///
/// Frames deref to `[Rgb; N]`, so pixels can be read or mutated directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> LedBuffer for Frame1d<N> {
    fn len(&self) -> usize {
        N
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.0.set_pixel_color(index, color);
    }

    fn pixel_color(&self, index: usize) -> Option<Rgb> {
        self.0.pixel_color(index)
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::colors;

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut frame = Frame1d::<4>::new();
        frame.set_pixel_color(4, colors::RED);
        frame.set_pixel_color(usize::MAX, colors::RED);
        assert_eq!(frame, Frame1d::new());
        assert_eq!(frame.pixel_color(4), None);
    }

    #[test]
    fn filled_frame_reports_its_length() {
        let frame = Frame1d::<5>::filled(colors::GREEN);
        assert_eq!(Frame1d::<5>::LEN, 5);
        assert_eq!(LedBuffer::len(&frame), Frame1d::<5>::LEN);
        assert_eq!(frame.pixel_color(4), Some(colors::GREEN));
        assert_eq!(<[Rgb; 5]>::from(frame), [colors::GREEN; 5]);
    }

    #[test]
    fn borrowed_slice_is_a_buffer() {
        let mut leds = [Rgb::default(); 3];
        let slice: &mut [Rgb] = &mut leds;
        assert_eq!(<[Rgb] as LedBuffer>::len(slice), 3);
        slice.set_pixel_color(1, colors::BLUE);
        assert_eq!(leds[1], colors::BLUE);
    }
}
