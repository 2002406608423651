//! Background policy and the two compositing passes it drives.
//!
//! Ordering matters: flattening onto a solid color happens on the source
//! crop *before* resampling, so antialiased edges blend with the chosen
//! background instead of being blended after the fact. The true-black lift
//! is the only post-resample adjustment.

use std::fmt;
use std::str::FromStr;

use crate::api::ResampleError;
use crate::buffer::{to_channel, PixelBuffer};
use crate::color::Rgb;

/// Largest accepted true-black lift.
pub const MAX_LIFT: u8 = 127;

/// Lift used when `true-black` is parsed without an explicit amount.
pub const DEFAULT_LIFT: u8 = 16;

/// How transparency in the source crop is resolved.
///
/// # Example
///
/// ```
/// use led_resample::{BackgroundPolicy, Rgb};
///
/// let policy: BackgroundPolicy = "#102030".parse().unwrap();
/// assert_eq!(policy, BackgroundPolicy::SolidColor(Rgb::new(0x10, 0x20, 0x30)));
///
/// let policy: BackgroundPolicy = "true-black:200".parse().unwrap();
/// assert_eq!(policy, BackgroundPolicy::TrueBlack { lift: 127 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundPolicy {
    /// Keep native alpha; transparent pixels fold to black at the end.
    #[default]
    Transparent,
    /// Flatten the crop onto an opaque color before resampling.
    SolidColor(Rgb),
    /// Keep alpha, then raise the floor of every covered pixel after
    /// resampling so LEDs with poor black uniformity never show true 0.
    TrueBlack {
        /// Floor added to covered pixels, `0..=127`
        lift: u8,
    },
}

impl BackgroundPolicy {
    /// True-black policy with `lift` capped at [`MAX_LIFT`].
    pub fn true_black(lift: u8) -> Self {
        BackgroundPolicy::TrueBlack {
            lift: lift.min(MAX_LIFT),
        }
    }

    /// Pre-resample pass over the source crop.
    ///
    /// Takes the crop by value: it is either returned untouched or flattened
    /// in place.
    pub fn composite_source(&self, crop: PixelBuffer) -> PixelBuffer {
        match *self {
            BackgroundPolicy::SolidColor(color) => flatten_onto(crop, color),
            BackgroundPolicy::Transparent | BackgroundPolicy::TrueBlack { .. } => crop,
        }
    }

    /// Post-resample pass over the destination buffer.
    pub fn composite_result(&self, resampled: PixelBuffer) -> PixelBuffer {
        match *self {
            BackgroundPolicy::TrueBlack { lift } => apply_lift(resampled, lift.min(MAX_LIFT)),
            BackgroundPolicy::Transparent | BackgroundPolicy::SolidColor(_) => resampled,
        }
    }
}

/// Blend every pixel over an opaque `background`; alpha becomes 255.
pub fn flatten_onto(mut buffer: PixelBuffer, background: Rgb) -> PixelBuffer {
    let bg = background.to_bytes();
    for px in buffer.pixels_mut() {
        let alpha = px[3] as f32;
        let inverse = 255.0 - alpha;
        for c in 0..3 {
            px[c] = to_channel((px[c] as f32 * alpha + bg[c] as f32 * inverse) / 255.0);
        }
        px[3] = 255;
    }
    buffer
}

/// Remap every channel of every pixel with non-zero alpha to
/// `lift + c * (255 - lift) / 255`. Alpha and uncovered pixels are untouched.
///
/// The resampled alpha decides coverage, not the original crop; existing
/// presets depend on that.
pub fn apply_lift(mut buffer: PixelBuffer, lift: u8) -> PixelBuffer {
    let floor = lift as f32;
    let range = (255 - lift) as f32 / 255.0;
    for px in buffer.pixels_mut() {
        if px[3] == 0 {
            continue;
        }
        for c in px.iter_mut().take(3) {
            *c = to_channel(floor + *c as f32 * range);
        }
    }
    buffer
}

impl fmt::Display for BackgroundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundPolicy::Transparent => f.write_str("transparent"),
            BackgroundPolicy::SolidColor(color) => write!(f, "{color}"),
            BackgroundPolicy::TrueBlack { lift } => write!(f, "true-black:{lift}"),
        }
    }
}

impl FromStr for BackgroundPolicy {
    type Err = ResampleError;

    /// Accepts `transparent`, `true-black`, `true-black:<lift>`, or a hex
    /// color (optionally prefixed `solid:`). Lifts above 127 are capped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        let unknown = || ResampleError::UnknownBackground(s.to_string());

        if lower == "transparent" || lower == "none" {
            return Ok(BackgroundPolicy::Transparent);
        }

        let (head, arg) = match lower.split_once(':') {
            Some((head, arg)) => (head, Some(arg.trim())),
            None => (lower.as_str(), None),
        };

        match head {
            "true-black" | "true_black" | "trueblack" => {
                let lift = match arg {
                    Some(n) => n.parse::<u16>().map_err(|_| unknown())?,
                    None => DEFAULT_LIFT as u16,
                };
                Ok(BackgroundPolicy::true_black(lift.min(MAX_LIFT as u16) as u8))
            }
            "solid" => {
                let color = arg.ok_or_else(unknown)?.parse::<Rgb>()?;
                Ok(BackgroundPolicy::SolidColor(color))
            }
            _ if arg.is_none() && looks_like_hex(&lower) => {
                Ok(BackgroundPolicy::SolidColor(lower.parse::<Rgb>()?))
            }
            _ => Err(unknown()),
        }
    }
}

fn looks_like_hex(s: &str) -> bool {
    s.starts_with('#') || s.chars().all(|c| c.is_ascii_hexdigit())
}
