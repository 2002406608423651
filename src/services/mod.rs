pub mod grid_pipeline;

pub use grid_pipeline::{GridPipeline, GridResult};
