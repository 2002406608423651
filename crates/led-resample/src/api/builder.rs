//! `resample_crop` and the [`GridResampler`] builder.
//!
//! This is the one operation collaborators call: crop, composite, resample,
//! composite again, fold.

use crate::api::ResampleError;
use crate::buffer::{CropRegion, PixelBuffer, TargetGrid};
use crate::composite::BackgroundPolicy;
use crate::kernel::ScalingAlgorithm;
use crate::output::{ResampleOutput, SampleList};
use crate::resample::resample;

/// Convert a square crop of `source` into a `target` grid of LED samples.
///
/// Pipeline:
/// 1. Validate crop (size, then bounds) and target
/// 2. Copy the crop out of the source
/// 3. Pre-resample background pass (solid color flattening)
/// 4. Resample with `algorithm`
/// 5. Post-resample background pass (true-black lift)
/// 6. Fold alpha into the sample list
///
/// Pure and deterministic: identical inputs give byte-identical outputs.
///
/// # Errors
///
/// - [`ResampleError::DegenerateCrop`] if `crop.size == 0`
/// - [`ResampleError::InvalidDimensions`] if the crop leaves the source or a
///   target dimension is zero
///
/// # Example
///
/// ```
/// use led_resample::{
///     resample_crop, BackgroundPolicy, CropRegion, PixelBuffer, Rgb, ScalingAlgorithm,
///     TargetGrid,
/// };
///
/// let source = PixelBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
/// let out = resample_crop(
///     &source,
///     CropRegion::new(0, 0, 4),
///     TargetGrid::new(2, 2).unwrap(),
///     ScalingAlgorithm::Box,
///     BackgroundPolicy::Transparent,
/// )
/// .unwrap();
///
/// assert_eq!(out.grid.as_slice(), &[Rgb::new(255, 0, 0); 4]);
/// ```
pub fn resample_crop(
    source: &PixelBuffer,
    crop: CropRegion,
    target: TargetGrid,
    algorithm: ScalingAlgorithm,
    background: BackgroundPolicy,
) -> Result<ResampleOutput, ResampleError> {
    crop.validate(source.width(), source.height())?;
    target.validate()?;

    let cropped = source.crop(crop)?;
    let prepared = background.composite_source(cropped);
    let resampled = resample(&prepared, target.width, target.height, algorithm)?;
    let preview = background.composite_result(resampled);
    let grid = SampleList::from_buffer(&preview);

    Ok(ResampleOutput { grid, preview })
}

/// Reusable resampling configuration for one LED layout.
///
/// - Constructor requires a [`TargetGrid`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`resample()`](Self::resample) takes `&self`, so one builder serves
///   every crop update
///
/// Defaults: [`ScalingAlgorithm::Box`], [`BackgroundPolicy::Transparent`].
///
/// # Example
///
/// ```
/// use led_resample::{
///     BackgroundPolicy, CropRegion, GridResampler, PixelBuffer, ScalingAlgorithm, TargetGrid,
/// };
///
/// let resampler = GridResampler::new(TargetGrid::new(8, 8).unwrap())
///     .algorithm(ScalingAlgorithm::Lanczos)
///     .background(BackgroundPolicy::true_black(12));
///
/// let image = PixelBuffer::filled(64, 48, [10, 200, 30, 255]).unwrap();
/// let out = resampler.resample(&image, CropRegion::centered(64, 48)).unwrap();
///
/// assert_eq!(out.grid.len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridResampler {
    target: TargetGrid,
    algorithm: ScalingAlgorithm,
    background: BackgroundPolicy,
}

impl GridResampler {
    /// Create a resampler for `target` with default algorithm and background.
    pub fn new(target: TargetGrid) -> Self {
        Self {
            target,
            algorithm: ScalingAlgorithm::default(),
            background: BackgroundPolicy::default(),
        }
    }

    /// Set the reconstruction filter.
    #[inline]
    pub fn algorithm(mut self, algorithm: ScalingAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the background policy.
    #[inline]
    pub fn background(mut self, background: BackgroundPolicy) -> Self {
        self.background = background;
        self
    }

    /// The configured target grid.
    #[inline]
    pub fn target(&self) -> TargetGrid {
        self.target
    }

    /// The configured algorithm.
    #[inline]
    pub fn scaling_algorithm(&self) -> ScalingAlgorithm {
        self.algorithm
    }

    /// The configured background policy.
    #[inline]
    pub fn background_policy(&self) -> BackgroundPolicy {
        self.background
    }

    /// Run [`resample_crop`] with this configuration.
    pub fn resample(
        &self,
        source: &PixelBuffer,
        crop: CropRegion,
    ) -> Result<ResampleOutput, ResampleError> {
        resample_crop(source, crop, self.target, self.algorithm, self.background)
    }
}
