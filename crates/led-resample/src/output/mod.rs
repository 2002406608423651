//! Output types for the resampling pipeline.
//!
//! - [`SampleList`]: alpha-folded RGB samples, one per LED, for the
//!   color-assignment model
//! - [`ResampleOutput`]: the sample list together with its RGBA preview

mod sample_list;

pub use sample_list::SampleList;

use crate::buffer::PixelBuffer;

/// Result of [`resample_crop`](crate::resample_crop).
///
/// Both fields derive from the same destination buffer, so they are always
/// mutually consistent: `grid` is exactly `SampleList::from_buffer(&preview)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleOutput {
    /// One RGB triple per LED index, row-major.
    pub grid: SampleList,
    /// The same cells as RGBA, for the visual renderer.
    pub preview: PixelBuffer,
}
