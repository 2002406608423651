//! Color types
//!
//! The engine works in the raw byte-intensity domain: [`Rgb`] carries plain
//! 8-bit channels with no transfer function attached.

mod rgb;

pub use rgb::Rgb;
