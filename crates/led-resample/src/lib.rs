#![allow(clippy::needless_range_loop, clippy::manual_range_contains)]

//! led-resample: image-to-grid resampling for LED rings, matrices and strips
//!
//! This library converts a square region cropped from an RGBA image into a
//! fixed-size grid of color samples, one per LED, using a selectable
//! reconstruction filter and alpha-aware background compositing.
//!
//! # Quick Start
//!
//! ```
//! use led_resample::{
//!     resample_crop, BackgroundPolicy, CropRegion, PixelBuffer, Rgb, ScalingAlgorithm,
//!     TargetGrid,
//! };
//!
//! let image = PixelBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
//! let out = resample_crop(
//!     &image,
//!     CropRegion::new(0, 0, 4),
//!     TargetGrid::new(2, 2).unwrap(),
//!     ScalingAlgorithm::Box,
//!     BackgroundPolicy::Transparent,
//! )
//! .unwrap();
//!
//! assert_eq!(out.grid.as_slice(), &[Rgb::new(255, 0, 0); 4]);
//! assert_eq!(out.preview.width(), 2);
//! ```
//!
//! For a layout that is resampled repeatedly (every drag of the crop
//! rectangle), configure a [`GridResampler`] once and call
//! [`GridResampler::resample`] per update.
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (RGBA8, caller-decoded)
//!     |
//!     v
//! crop                     (square CropRegion, copied out)
//!     |
//!     v
//! background pre-pass      (SolidColor: flatten onto opaque color)
//!     |
//!     v
//! premultiply              (rgb *= alpha / 255, f32)
//!     |
//!     v
//! kernel per cell          (box | bilinear | bicubic | lanczos,
//!     |                     clamp-to-edge taps)
//!     v
//! un-premultiply + clamp   (rgb = c * 255 / alpha, 0..=255)
//!     |
//!     v
//! background post-pass     (TrueBlack: lift covered pixels)  --> preview
//!     |
//!     v
//! alpha fold               (rgb *= alpha / 255, u8)          --> grid
//! ```
//!
//! # Two Alpha Steps
//!
//! Alpha is handled twice, for two different reasons, and the steps must not
//! be merged:
//!
//! 1. **Premultiply / un-premultiply** around the kernels. Interpolating
//!    straight (non-premultiplied) color lets a fully transparent pixel's
//!    arbitrary RGB bleed into its neighbors. Premultiplying gives
//!    transparent pixels zero color mass; dividing by the interpolated alpha
//!    afterwards restores display color.
//! 2. **Fold** in [`SampleList::from_buffer`]. LEDs have no alpha channel,
//!    so coverage is baked into brightness as the final step.
//!
//! # Numeric Domain
//!
//! All arithmetic runs on raw byte intensities, not linear light. Every
//! output channel is clamped to `0..=255`; Lanczos ringing never escapes.
//! The engine is synchronous, allocation-only and never logs.

pub mod api;
pub mod buffer;
pub mod color;
pub mod composite;
pub mod kernel;
pub mod output;
pub mod resample;

#[cfg(test)]
mod domain_tests;

pub use api::{resample_crop, GridResampler, ParseColorError, ResampleError};
pub use buffer::{CropRegion, PixelBuffer, TargetGrid};
pub use color::Rgb;
pub use composite::{BackgroundPolicy, MAX_LIFT};
pub use kernel::ScalingAlgorithm;
pub use output::{ResampleOutput, SampleList};
pub use resample::resample;
