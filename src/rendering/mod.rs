pub mod export;
pub mod image_io;

pub use export::{render_samples, ExportFormat};
pub use image_io::{decode_png, encode_preview_png, load_png};
