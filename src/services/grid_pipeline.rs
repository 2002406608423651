use std::path::Path;

use led_resample::{CropRegion, GridResampler, PixelBuffer, ResampleOutput};

use crate::error::GridError;
use crate::models::LayoutConfig;
use crate::rendering::{encode_preview_png, load_png, render_samples, ExportFormat};

/// Result from running the grid pipeline
pub struct GridResult {
    /// Samples and preview produced by the engine
    pub output: ResampleOutput,
    /// Crop that was actually applied to the source
    pub crop: CropRegion,
}

/// Grid pipeline that orchestrates decode -> crop -> resample -> export
pub struct GridPipeline {
    layout: LayoutConfig,
    resampler: GridResampler,
}

impl GridPipeline {
    pub fn new(layout: LayoutConfig) -> Result<Self, GridError> {
        let resampler = layout.resampler()?;
        Ok(Self { layout, resampler })
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Resample `source`, using the largest centered square when no crop is given.
    pub fn process(
        &self,
        source: &PixelBuffer,
        crop: Option<CropRegion>,
    ) -> Result<GridResult, GridError> {
        let crop = crop.unwrap_or_else(|| CropRegion::centered(source.width(), source.height()));

        let output = self.resampler.resample(source, crop)?;

        tracing::info!(
            source_width = source.width(),
            source_height = source.height(),
            crop_x = crop.x,
            crop_y = crop.y,
            crop_size = crop.size,
            grid_width = output.grid.width(),
            grid_height = output.grid.height(),
            algorithm = %self.resampler.scaling_algorithm(),
            background = %self.resampler.background_policy(),
            "Resampled crop onto LED grid"
        );

        Ok(GridResult { output, crop })
    }

    /// Decode a PNG file and resample it
    pub fn process_file(
        &self,
        path: &Path,
        crop: Option<CropRegion>,
    ) -> Result<GridResult, GridError> {
        let source = load_png(path)?;
        self.process(&source, crop)
    }

    /// Render the sample list of `result` as text
    pub fn export(&self, result: &GridResult, format: ExportFormat) -> String {
        render_samples(&result.output.grid, format)
    }

    /// Encode the preview buffer of `result` at the layout's preview scale
    pub fn preview_png(&self, result: &GridResult) -> Result<Vec<u8>, GridError> {
        encode_preview_png(&result.output.preview, self.layout.preview_scale)
    }
}
