//! Flat RGB sample list, one entry per LED cell.
//!
//! [`SampleList`] is the output the rest of the application consumes. LED
//! hardware has no alpha channel, so coverage is folded into brightness
//! here, as the last step. This fold is separate from the kernel-internal
//! un-premultiply and must never be applied twice.

use std::ops::Index;

use crate::buffer::{to_channel, PixelBuffer};
use crate::color::Rgb;

/// Ordered opaque RGB samples, row-major, alpha already folded in.
///
/// # Example
///
/// ```
/// use led_resample::{PixelBuffer, Rgb, SampleList};
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 255, 255, 255, 0]).unwrap();
/// let samples = SampleList::from_buffer(&buffer);
///
/// assert_eq!(samples.as_slice(), &[Rgb::new(255, 0, 0), Rgb::BLACK]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleList {
    width: usize,
    height: usize,
    samples: Vec<Rgb>,
}

impl SampleList {
    /// Fold alpha into color: `round(c * alpha / 255)` per channel.
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        let samples = buffer
            .pixels()
            .map(|[r, g, b, a]| {
                let coverage = a as f32 / 255.0;
                Rgb::new(
                    to_channel(r as f32 * coverage),
                    to_channel(g as f32 * coverage),
                    to_channel(b as f32 * coverage),
                )
            })
            .collect();

        Self {
            width: buffer.width(),
            height: buffer.height(),
            samples,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of samples (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for lists built from a valid buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in LED index order.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.samples
    }

    /// Sample for the cell at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples.get(y * self.width + x).copied()
    }

    /// Iterate over samples in LED index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rgb> {
        self.samples.iter()
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, length `len() * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.samples.len() * 3);
        for sample in &self.samples {
            rgb.extend_from_slice(&sample.to_bytes());
        }
        rgb
    }

    /// Consume the list and return the samples.
    pub fn into_vec(self) -> Vec<Rgb> {
        self.samples
    }
}

impl Index<usize> for SampleList {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a SampleList {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
