//! Bicubic filter using the Catmull-Rom kernel (a = -0.5) over 4x4 taps.

use super::{source_coordinate, Scale};
use crate::buffer::PremultipliedBuffer;

const A: f32 = -0.5;

/// Catmull-Rom weight for a tap at distance `x`.
#[inline]
pub(crate) fn cubic_weight(x: f32) -> f32 {
    let x = x.abs();
    if x < 1.0 {
        (A + 2.0) * x * x * x - (A + 3.0) * x * x + 1.0
    } else if x < 2.0 {
        A * x * x * x - 5.0 * A * x * x + 8.0 * A * x - 4.0 * A
    } else {
        0.0
    }
}

/// Tap offsets and weights along one axis, relative to `floor(s)`.
#[inline]
fn axis_weights(s: f32) -> (i64, [f32; 4]) {
    let base = s.floor();
    let mut weights = [0.0; 4];
    for (i, w) in weights.iter_mut().enumerate() {
        let tap = base + i as f32 - 1.0;
        *w = cubic_weight(s - tap);
    }
    (base as i64 - 1, weights)
}

pub(crate) fn sample(src: &PremultipliedBuffer, dx: usize, dy: usize, scale: Scale) -> [f32; 4] {
    let (x_start, wx) = axis_weights(source_coordinate(dx, scale.x));
    let (y_start, wy) = axis_weights(source_coordinate(dy, scale.y));

    let mut acc = [0.0f32; 4];
    let mut total = 0.0f32;
    for (j, &weight_y) in wy.iter().enumerate() {
        for (i, &weight_x) in wx.iter().enumerate() {
            let w = weight_x * weight_y;
            let px = src.sample(x_start + i as i64, y_start + j as i64);
            for (a, p) in acc.iter_mut().zip(px) {
                *a += p * w;
            }
            total += w;
        }
    }

    let norm = if total == 0.0 { 1.0 } else { total };
    acc.map(|c| c / norm)
}
