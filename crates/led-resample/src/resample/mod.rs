//! Kernel orchestration.
//!
//! [`resample`] premultiplies the source, runs the selected kernel for every
//! destination cell, un-premultiplies and clamps the result. It knows nothing
//! about crops or backgrounds; those are layered on by
//! [`resample_crop`](crate::resample_crop).

mod resampler;

pub use resampler::resample;
