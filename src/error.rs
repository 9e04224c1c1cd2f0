use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Drawing itself never fails; these errors come only from checked construction with
/// [`NeoMatrix::try_new`](crate::matrix::NeoMatrix::try_new).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Panel width or height is zero.
    #[display("panel width and height must be positive")]
    EmptyPanel,

    /// The layout describes a different number of LEDs than the buffer holds.
    #[display("layout needs {expected} LEDs but the buffer holds {actual}")]
    LedCountMismatch {
        /// LEDs described by the layout.
        expected: usize,
        /// LEDs owned by the buffer.
        actual: usize,
    },

    /// Canvas width or height does not fit in a `u16` coordinate.
    #[display("canvas dimensions must fit in u16 coordinates")]
    CanvasTooLarge,
}
