use led_resample::ResampleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Resample error: {0}")]
    Resample(#[from] ResampleError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown export format: {0:?} (expected json, hex or c-array)")]
    UnknownFormat(String),
}
