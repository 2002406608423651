//! Box (area-average) filter.
//!
//! Averages every source pixel whose index falls in the destination cell's
//! footprint. This is the anti-aliasing choice for downscaling: each source
//! pixel contributes to the cell it lies under and nothing else.

use super::Scale;
use crate::buffer::PremultipliedBuffer;

/// Source index range `[start, end)` covered by destination index `d`.
///
/// A source pixel belongs to the cell whose interval `[d*s, (d+1)*s)`
/// contains its index, so neighbouring cells never share a pixel. When
/// upscaling leaves that interval without an index, the pixel under the
/// cell center is used instead.
#[inline]
fn footprint(d: usize, scale: f32, len: usize) -> (usize, usize) {
    let start = ((d as f32 * scale).ceil() as usize).min(len);
    let end = (((d + 1) as f32 * scale).ceil() as usize).min(len);
    if start < end {
        return (start, end);
    }
    let nearest = ((d as f32 + 0.5) * scale).floor() as usize;
    if nearest < len {
        (nearest, nearest + 1)
    } else {
        (start, end)
    }
}

/// Arithmetic mean of the footprint, or `(0, 0, 0, 0)` if it is empty.
pub(crate) fn sample(src: &PremultipliedBuffer, dx: usize, dy: usize, scale: Scale) -> [f32; 4] {
    let (x0, x1) = footprint(dx, scale.x, src.width());
    let (y0, y1) = footprint(dy, scale.y, src.height());

    // f64 accumulation keeps huge footprints exact enough to round back
    let mut acc = [0.0f64; 4];
    let mut count = 0usize;
    for y in y0..y1 {
        for x in x0..x1 {
            let px = src.sample(x as i64, y as i64);
            for (a, p) in acc.iter_mut().zip(px) {
                *a += p as f64;
            }
            count += 1;
        }
    }

    if count == 0 {
        return [0.0; 4];
    }
    let n = count as f64;
    acc.map(|c| (c / n) as f32)
}
