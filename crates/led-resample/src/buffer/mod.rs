//! Pixel buffers and geometry.
//!
//! - [`PixelBuffer`]: owned RGBA8 grid, the type every stage hands off
//! - [`CropRegion`]: square source window
//! - [`TargetGrid`]: destination LED cell count
//!
//! The premultiplied working buffer is crate-private; it exists only for the
//! duration of one resample call.

mod pixel_buffer;
mod premultiplied;

pub use pixel_buffer::{CropRegion, PixelBuffer, TargetGrid};

pub(crate) use pixel_buffer::byte_len;
pub(crate) use premultiplied::{premultiply, to_channel, unpremultiply, PremultipliedBuffer};
