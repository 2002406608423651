//! Whole-buffer resampling.

use crate::api::ResampleError;
use crate::buffer::{byte_len, premultiply, to_channel, unpremultiply, PixelBuffer};
use crate::kernel::{Scale, ScalingAlgorithm};

/// Resample `source` to `dest_width x dest_height` with `algorithm`.
///
/// Interpolation runs on premultiplied data; every output channel is
/// un-premultiplied and clamped to `0..=255` before it is stored, so kernel
/// overshoot (Lanczos ringing) never reaches the caller. Scale factors are
/// computed independently per axis.
///
/// # Errors
///
/// [`ResampleError::InvalidDimensions`] if either destination dimension is
/// zero or the destination byte count overflows. No partial buffer is
/// produced.
///
/// # Example
///
/// ```
/// use led_resample::{resample, PixelBuffer, ScalingAlgorithm};
///
/// let source = PixelBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
/// let out = resample(&source, 2, 2, ScalingAlgorithm::Box).unwrap();
/// assert!(out.pixels().all(|px| px == [255, 0, 0, 255]));
/// ```
pub fn resample(
    source: &PixelBuffer,
    dest_width: usize,
    dest_height: usize,
    algorithm: ScalingAlgorithm,
) -> Result<PixelBuffer, ResampleError> {
    let len = byte_len("target", dest_width, dest_height)?;

    let premultiplied = premultiply(source);
    let scale = Scale::between(source.width(), source.height(), dest_width, dest_height);

    let mut data = Vec::with_capacity(len);
    for dy in 0..dest_height {
        for dx in 0..dest_width {
            let sample = algorithm.sample(&premultiplied, dx, dy, scale);
            let [r, g, b] = unpremultiply(sample);
            data.extend_from_slice(&[r, g, b, to_channel(sample[3])]);
        }
    }

    PixelBuffer::new(dest_width, dest_height, data)
}
