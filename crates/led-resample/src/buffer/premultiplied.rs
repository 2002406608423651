//! Premultiplied-alpha working buffer and its clamp-to-edge sampler.
//!
//! Kernels interpolate in premultiplied space so that fully transparent
//! neighbors cannot bleed their (arbitrary) color into partially covered
//! edges. The buffer lives only inside a single resample call.

use super::PixelBuffer;

/// Same shape as a [`PixelBuffer`], but `r, g, b` hold `color * alpha / 255`
/// as unclamped floats and `a` holds the original alpha (0..=255).
#[derive(Debug, Clone)]
pub(crate) struct PremultipliedBuffer {
    width: usize,
    height: usize,
    data: Vec<[f32; 4]>,
}

impl PremultipliedBuffer {
    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Fetch the premultiplied channels at `(x, y)`, clamping each
    /// coordinate to the nearest edge pixel.
    ///
    /// Out-of-range reads are routine for edge-adjacent kernel taps and are
    /// never an error.
    #[inline]
    pub(crate) fn sample(&self, x: i64, y: i64) -> [f32; 4] {
        let cx = x.clamp(0, self.width as i64 - 1) as usize;
        let cy = y.clamp(0, self.height as i64 - 1) as usize;
        self.data[cy * self.width + cx]
    }
}

/// Scale every color channel by `alpha / 255`, keeping alpha itself.
pub(crate) fn premultiply(source: &PixelBuffer) -> PremultipliedBuffer {
    let data = source
        .pixels()
        .map(|[r, g, b, a]| {
            let coverage = a as f32 / 255.0;
            [
                r as f32 * coverage,
                g as f32 * coverage,
                b as f32 * coverage,
                a as f32,
            ]
        })
        .collect();

    PremultipliedBuffer {
        width: source.width(),
        height: source.height(),
        data,
    }
}

/// Recover display-ready color from an interpolated premultiplied sample.
///
/// Returns `round(clamp(c * 255 / alpha, 0, 255))` per channel, or black
/// when `alpha <= 0`.
#[inline]
pub(crate) fn unpremultiply(sample: [f32; 4]) -> [u8; 3] {
    let alpha = sample[3];
    if alpha <= 0.0 {
        return [0, 0, 0];
    }
    let scale = 255.0 / alpha;
    [
        to_channel(sample[0] * scale),
        to_channel(sample[1] * scale),
        to_channel(sample[2] * scale),
    ]
}

/// Round and clamp a float channel into `0..=255`.
#[inline]
pub(crate) fn to_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premultiply_scales_by_alpha() {
        let source = PixelBuffer::new(2, 1, vec![200, 100, 50, 255, 200, 100, 50, 51]).unwrap();
        let pm = premultiply(&source);

        assert_eq!(pm.sample(0, 0), [200.0, 100.0, 50.0, 255.0]);
        let half = pm.sample(1, 0);
        assert!((half[0] - 40.0).abs() < 1e-4);
        assert!((half[1] - 20.0).abs() < 1e-4);
        assert!((half[2] - 10.0).abs() < 1e-4);
        assert_eq!(half[3], 51.0);
    }

    #[test]
    fn test_transparent_pixel_has_no_color_mass() {
        let source = PixelBuffer::filled(1, 1, [255, 255, 255, 0]).unwrap();
        let pm = premultiply(&source);
        assert_eq!(pm.sample(0, 0), [0.0; 4]);
    }

    #[test]
    fn test_sample_clamps_to_edges() {
        let source =
            PixelBuffer::from_fn(3, 2, |x, y| [x as u8 * 10, y as u8 * 10, 0, 255]).unwrap();
        let pm = premultiply(&source);

        assert_eq!(pm.sample(-5, -5), pm.sample(0, 0));
        assert_eq!(pm.sample(7, 0), pm.sample(2, 0));
        assert_eq!(pm.sample(1, 9), pm.sample(1, 1));
        assert_eq!(pm.sample(i64::MAX, i64::MIN), pm.sample(2, 0));
        assert_eq!(pm.width(), 3);
        assert_eq!(pm.height(), 2);
    }

    #[test]
    fn test_unpremultiply_inverts_premultiply() {
        for alpha in [1u8, 17, 128, 254, 255] {
            let source = PixelBuffer::filled(1, 1, [255, 128, 3, alpha]).unwrap();
            let restored = unpremultiply(premultiply(&source).sample(0, 0));
            assert_eq!(restored, [255, 128, 3], "alpha {alpha}");
        }
    }

    #[test]
    fn test_unpremultiply_zero_alpha_is_black() {
        assert_eq!(unpremultiply([12.0, 34.0, 56.0, 0.0]), [0, 0, 0]);
        assert_eq!(unpremultiply([12.0, 34.0, 56.0, -3.0]), [0, 0, 0]);
    }

    #[test]
    fn test_unpremultiply_clamps_overshoot() {
        assert_eq!(unpremultiply([300.0, -20.0, 127.4, 255.0]), [255, 0, 127]);
    }

    #[test]
    fn test_to_channel_handles_nan() {
        assert_eq!(to_channel(f32::NAN), 0);
        assert_eq!(to_channel(254.5), 255);
        assert_eq!(to_channel(-0.4), 0);
    }
}
