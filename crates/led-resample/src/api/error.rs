//! Unified error type for the led-resample public API.
//!
//! [`ResampleError`] covers caller-correctable misuse: bad dimensions, an
//! empty crop, a mis-sized pixel buffer, or an unparseable option string.
//! Arithmetic edge cases inside the kernels are never errors.

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0:?}")]
    InvalidHex(char),
}

/// Error returned by the resampling engine.
///
/// # Example
///
/// ```
/// use led_resample::{ResampleError, TargetGrid};
///
/// let err = TargetGrid::new(0, 8).unwrap_err();
/// assert!(matches!(err, ResampleError::InvalidDimensions { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResampleError {
    /// A width or height is zero, or the crop leaves the source bounds.
    #[error("invalid dimensions: {reason}")]
    InvalidDimensions {
        /// Which dimension check failed
        reason: String,
    },

    /// The crop region has size zero.
    #[error("degenerate crop: size must be greater than zero")]
    DegenerateCrop,

    /// Pixel data length does not match `width * height * 4`.
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLength {
        /// Required byte count
        expected: usize,
        /// Supplied byte count
        actual: usize,
    },

    /// Invalid hex color string
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Unrecognized scaling algorithm name
    #[error("unknown scaling algorithm: {0:?} (expected box, bilinear, bicubic or lanczos)")]
    UnknownAlgorithm(String),

    /// Unrecognized background policy string
    #[error("unknown background policy: {0:?} (expected transparent, true-black[:lift] or a hex color)")]
    UnknownBackground(String),
}

impl ResampleError {
    pub(crate) fn invalid_dimensions(reason: impl Into<String>) -> Self {
        ResampleError::InvalidDimensions {
            reason: reason.into(),
        }
    }
}
