//! Drive tiled NeoPixel-style (WS2812) LED matrices as ordinary raster surfaces.
//!
//! A [`NeoMatrix`](matrix::NeoMatrix) sits between [`embedded-graphics`](https://docs.rs/embedded-graphics)
//! and a one-dimensional LED buffer. Every pixel it receives is rotated, located on its
//! physical panel, and written to the LED that is actually wired there, in a 24-bit color
//! expanded from the 16-bit drawing color.
//!
//! # Glossary
//!
//! - **Panel:** one physical rectangular LED grid with fixed wiring.
//! - **Tile grid:** several panels composed into one larger logical canvas.
//! - **Progressive:** every line of a grid is wired starting from the same side.
//! - **Zigzag (serpentine):** alternate lines reverse direction, as a continuous strip does.
//! - **Major axis:** the outer dimension (rows or columns) when walking the wiring.
//! - **Passthrough:** a drawing mode that writes one raw 24-bit color, skipping gamma.
#![cfg_attr(not(any(test, feature = "host")), no_std)]

pub mod color;
mod error;
pub mod led_strip;
pub mod matrix;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
pub use crate::matrix::NeoMatrix;
