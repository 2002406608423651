//! Lanczos windowed-sinc filter, window a = 3.
//!
//! Sharpest of the four kernels and the only one whose output may overshoot
//! the source range; callers clamp after un-premultiplying.

use std::f32::consts::PI;

use super::{source_coordinate, Scale};
use crate::buffer::PremultipliedBuffer;

const A: i64 = 3;
const TAPS: usize = (2 * A) as usize;

#[inline]
fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}

/// `sinc(d) * sinc(d / a)` inside the window, 0 outside.
#[inline]
pub(crate) fn lanczos_weight(d: f32) -> f32 {
    let a = A as f32;
    if d.abs() >= a {
        return 0.0;
    }
    sinc(d) * sinc(d / a)
}

/// First tap index and weights for taps `floor(s) - a + 1 ..= floor(s) + a`.
#[inline]
fn axis_weights(s: f32) -> (i64, [f32; TAPS]) {
    let base = s.floor() as i64;
    let first = base - A + 1;
    let mut weights = [0.0; TAPS];
    for (i, w) in weights.iter_mut().enumerate() {
        *w = lanczos_weight(s - (first + i as i64) as f32);
    }
    (first, weights)
}

pub(crate) fn sample(src: &PremultipliedBuffer, dx: usize, dy: usize, scale: Scale) -> [f32; 4] {
    let (x_first, wx) = axis_weights(source_coordinate(dx, scale.x));
    let (y_first, wy) = axis_weights(source_coordinate(dy, scale.y));

    let mut acc = [0.0f32; 4];
    let mut total = 0.0f32;
    for (j, &weight_y) in wy.iter().enumerate() {
        if weight_y == 0.0 {
            continue;
        }
        for (i, &weight_x) in wx.iter().enumerate() {
            let w = weight_x * weight_y;
            let px = src.sample(x_first + i as i64, y_first + j as i64);
            for (a, p) in acc.iter_mut().zip(px) {
                *a += p * w;
            }
            total += w;
        }
    }

    let norm = if total == 0.0 { 1.0 } else { total };
    acc.map(|c| c / norm)
}
