//! Background compositing.
//!
//! [`BackgroundPolicy`] decides how the source crop's transparency is
//! resolved:
//!
//! - **Transparent**: alpha flows through the kernels untouched and is folded
//!   into brightness at the very end by the grid extractor
//! - **SolidColor**: the crop is flattened onto an opaque color before
//!   resampling
//! - **TrueBlack**: alpha is kept, and after resampling every covered pixel
//!   gets a small additive floor

mod background;

pub use background::{apply_lift, flatten_onto, BackgroundPolicy, DEFAULT_LIFT, MAX_LIFT};
