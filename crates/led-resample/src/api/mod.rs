//! Public API for the led-resample crate.
//!
//! This module provides the high-level entry points, [`resample_crop`] and
//! the [`GridResampler`] builder, plus the [`ResampleError`] error type.

mod builder;
mod error;

pub use builder::{resample_crop, GridResampler};
pub use error::{ParseColorError, ResampleError};
