//! 16-bit (RGB565) drawing colors and their 24-bit LED expansion.
//!
//! Drawing surfaces speak 16-bit color: 5 bits red, 6 bits green, 5 bits blue, packed as
//! `rrrrrggg gggbbbbb`. LEDs want 8 bits per channel. Widening goes through a gamma curve
//! so that evenly spaced drawing colors also *look* evenly spaced on the LEDs.
//!
//! ```rust
//! use matrix_envoy::color::{color16, color_hsv, expand_color, Rgb};
//!
//! assert_eq!(color16(255, 0, 0), 0xF800);
//! assert_eq!(color_hsv(0, 255, 255), color16(255, 0, 0));
//! assert_eq!(expand_color(0xFFFF), Rgb::new(255, 255, 255));
//! ```

use embedded_graphics::pixelcolor::{
    Rgb565,
    raw::{RawData, RawU16},
};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// 24-bit LED color, re-exported from the `smart_leds` crate.
pub type Rgb = smart_leds::RGB8;

// ============================================================================
// Gamma Correction
// ============================================================================

/// Curve used to widen 5- and 6-bit channels to 8 bits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gamma {
    /// No correction: channels are shifted up (`r5 << 3`, `g6 << 2`, `b5 << 3`).
    Linear,
    /// Perceptual correction with gamma 2.6 ([`GAMMA5`] and [`GAMMA6`]).
    #[default]
    Gamma2_6,
    /// Caller-supplied lookup tables, e.g. ones measured for a particular LED batch.
    Custom(&'static GammaTables),
}

/// Lookup tables for [`Gamma::Custom`]: 32 entries for red and blue, 64 for green.
///
/// ```rust
/// use matrix_envoy::color::{Gamma, GammaTables, Rgb, color16, expand_color_with};
///
/// // A gentler curve that keeps the dimmest levels lit.
/// static SOFT: GammaTables = GammaTables::new(
///     [
///         0, 1, 2, 3, 5, 7, 9, 11, 14, 17, 20, 24, 29, 34, 40, 46, 54, 61, 70, 79, 89, 100,
///         111, 124, 137, 151, 166, 182, 199, 217, 235, 255,
///     ],
///     [
///         0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 16, 18, 19, 21, 23, 25, 27, 29, 32,
///         34, 37, 39, 42, 45, 48, 51, 55, 58, 62, 65, 69, 73, 77, 82, 86, 91, 95, 100, 105,
///         110, 116, 121, 127, 133, 139, 145, 151, 157, 164, 171, 178, 185, 192, 199, 207,
///         215, 223, 231, 239, 255,
///     ],
/// );
///
/// let dim_red = color16(8, 0, 0);
/// assert_eq!(expand_color_with(dim_red, Gamma::Custom(&SOFT)), Rgb::new(1, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GammaTables {
    /// Table for the 5-bit red and blue channels.
    pub five: [u8; 32],
    /// Table for the 6-bit green channel.
    pub six: [u8; 64],
}

impl GammaTables {
    /// Tables for 5-bit (red, blue) and 6-bit (green) channels.
    #[must_use]
    pub const fn new(five: [u8; 32], six: [u8; 64]) -> Self {
        Self { five, six }
    }

    /// Widen a 16-bit color through these tables.
    #[must_use]
    pub const fn expand(&self, color: u16) -> Rgb {
        let (red, green, blue) = channels(color);
        Rgb::new(
            self.five[red as usize],
            self.six[green as usize],
            self.five[blue as usize],
        )
    }
}

/// The default gamma 2.6 tables as a [`GammaTables`] value.
pub const GAMMA_2_6_TABLES: GammaTables = GammaTables::new(GAMMA5, GAMMA6);

/// Default expansion curve for new matrices (`Gamma::Gamma2_6`).
pub const GAMMA_DEFAULT: Gamma = Gamma::Gamma2_6;

/// Gamma 2.6 lookup table for 5-bit channels (red and blue).
/// `round((value / 31)^2.6 * 255)`
pub const GAMMA5: [u8; 32] = [
    0, 0, 0, 1, 1, 2, 4, 5, 8, 10, 13, 17, 22, 27, 32, 39, 46, 53, 62, 71, 82, 93, 105, 117, 131,
    146, 161, 178, 196, 214, 234, 255,
];

/// Gamma 2.6 lookup table for 6-bit channels (green).
/// `round((value / 63)^2.6 * 255)`
pub const GAMMA6: [u8; 64] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6, 7, 8, 10, 11, 13, 15, 17, 19, 21, 23, 26, 28,
    31, 34, 37, 40, 44, 47, 51, 55, 60, 64, 69, 73, 78, 83, 89, 94, 100, 106, 113, 119, 126, 133,
    140, 147, 155, 163, 171, 179, 188, 197, 206, 215, 225, 234, 245, 255,
];

// ============================================================================
// Packing
// ============================================================================

/// Pack 8-bit channels into a 16-bit color, truncating to 5/6/5 bits.
///
/// Precision loss is silent; no rounding is applied.
#[must_use]
pub const fn color16(red: u8, green: u8, blue: u8) -> u16 {
    ((red as u16 & 0xF8) << 8) | ((green as u16 & 0xFC) << 3) | (blue as u16 >> 3)
}

/// Split a 16-bit color into its raw `(red5, green6, blue5)` channels.
#[must_use]
pub const fn channels(color: u16) -> (u8, u8, u8) {
    (
        (color >> 11) as u8,
        ((color >> 5) & 0x3F) as u8,
        (color & 0x1F) as u8,
    )
}

/// Widen a 16-bit color to 24 bits without gamma correction.
///
/// For any color built by [`color16`], `color16` of the result gives the color back.
#[must_use]
pub const fn unpack(color: u16) -> Rgb {
    let (red, green, blue) = channels(color);
    Rgb::new(red << 3, green << 2, blue << 3)
}

/// Widen a 16-bit color to 24 bits through the default gamma 2.6 tables.
#[must_use]
pub const fn expand_color(color: u16) -> Rgb {
    GAMMA_2_6_TABLES.expand(color)
}

/// Widen a 16-bit color to 24 bits using the given curve.
#[must_use]
pub const fn expand_color_with(color: u16, gamma: Gamma) -> Rgb {
    match gamma {
        Gamma::Linear => unpack(color),
        Gamma::Gamma2_6 => expand_color(color),
        Gamma::Custom(tables) => tables.expand(color),
    }
}

// ============================================================================
// HSV
// ============================================================================

/// Convert hue, saturation and value to a 16-bit color.
///
/// `hue` covers the whole color wheel with red centered on the `0`/`65535` rollover, so
/// hue arithmetic can wrap freely in either direction. Saturation `0` is white (scaled by
/// `val`); value `0` is black.
///
/// ```rust
/// use matrix_envoy::color::{color16, color_hsv};
///
/// assert_eq!(color_hsv(65535, 255, 255), color16(255, 0, 0)); // wraps to red
/// assert_eq!(color_hsv(21845, 255, 255), color16(0, 255, 0)); // one third: green
/// assert_eq!(color_hsv(25500, 0, 255), color16(255, 255, 255)); // no saturation: white
/// ```
#[must_use]
pub const fn color_hsv(hue: u16, sat: u8, val: u8) -> u16 {
    // Remap 0..=65535 to the 1530 distinct hues of the 8-bit hexcone (rounded).
    let hue = ((hue as u32 * 1530 + 32768) / 65536) as u16;

    let (red, green, blue) = if hue < 510 {
        // Red to green
        if hue < 255 {
            (255, hue, 0)
        } else {
            (510 - hue, 255, 0)
        }
    } else if hue < 1020 {
        // Green to blue
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < 1530 {
        // Blue to red
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, 1530 - hue)
        }
    } else {
        // Last half step of red
        (255, 0, 0)
    };

    color16(
        scale_channel(red, sat, val),
        scale_channel(green, sat, val),
        scale_channel(blue, sat, val),
    )
}

// 1..=256 factors allow `>> 8` instead of `/ 255`.
const fn scale_channel(channel: u16, sat: u8, val: u8) -> u8 {
    let v1 = 1 + val as u32;
    let s1 = 1 + sat as u32;
    let s2 = 255 - sat as u32;
    (((((channel as u32 * s1) >> 8) + s2) * v1) >> 8) as u8
}

// ============================================================================
// Conversions
// ============================================================================

/// Build an [`Rgb`] from a packed `0xRRGGBB` value (the top byte is ignored).
#[must_use]
pub const fn rgb_from_u32(packed: u32) -> Rgb {
    Rgb::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}

/// Pack an [`Rgb`] into `0xRRGGBB`.
#[must_use]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Convert an `embedded-graphics` [`Rgb565`] to a 16-bit color.
#[must_use]
pub fn rgb565_to_color16(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}

/// Convert a 16-bit color to an `embedded-graphics` [`Rgb565`].
#[must_use]
pub fn color16_to_rgb565(color: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(color))
}
