//! Quarter-turn rotation of the drawing canvas.
//!
//! Rotation is applied to each logical coordinate before any addressing math, so a
//! rotated matrix looks to the drawing code like a panel of swapped (90°, 270°) or
//! unchanged (0°, 180°) dimensions.

/// Clockwise rotation of the logical canvas relative to the wired panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// 90° clockwise: logical `(0, 0)` is the panel's top-right corner.
    Deg90,
    /// 180°: logical `(0, 0)` is the panel's bottom-right corner.
    Deg180,
    /// 270° clockwise: logical `(0, 0)` is the panel's bottom-left corner.
    Deg270,
}

impl Rotation {
    /// Rotation from a quarter-turn count; only the low two bits are used.
    ///
    /// ```rust
    /// use matrix_envoy::matrix::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(1), Rotation::Deg90);
    /// assert_eq!(Rotation::from_index(6), Rotation::Deg180);
    /// ```
    #[must_use]
    pub const fn from_index(quarter_turns: u8) -> Self {
        match quarter_turns & 3 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Quarter-turn count in `0..=3`.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Whether logical width and height are swapped relative to the panels.
    #[must_use]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Logical `(width, height)` of a canvas that is `width × height` unrotated.
    #[must_use]
    pub const fn dimensions(self, width: usize, height: usize) -> (usize, usize) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Map logical `(x, y)` to unrotated canvas coordinates.
    ///
    /// `width` and `height` are the *unrotated* canvas dimensions, and `(x, y)` must
    /// already be inside the rotated bounds.
    #[must_use]
    pub const fn apply(self, x: usize, y: usize, width: usize, height: usize) -> (usize, usize) {
        match self {
            Self::Deg0 => (x, y),
            Self::Deg90 => (width - 1 - y, x),
            Self::Deg180 => (width - 1 - x, height - 1 - y),
            Self::Deg270 => (y, height - 1 - x),
        }
    }
}
