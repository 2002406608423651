//! Bilinear filter over a 2x2 neighborhood.

use super::{source_coordinate, Scale};
use crate::buffer::PremultipliedBuffer;

#[inline]
fn lerp(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

pub(crate) fn sample(src: &PremultipliedBuffer, dx: usize, dy: usize, scale: Scale) -> [f32; 4] {
    let sx = source_coordinate(dx, scale.x);
    let sy = source_coordinate(dy, scale.y);

    let fx0 = sx.floor();
    let fy0 = sy.floor();
    let tx = sx - fx0;
    let ty = sy - fy0;
    let x0 = fx0 as i64;
    let y0 = fy0 as i64;

    let top = lerp(src.sample(x0, y0), src.sample(x0 + 1, y0), tx);
    let bottom = lerp(src.sample(x0, y0 + 1), src.sample(x0 + 1, y0 + 1), tx);
    lerp(top, bottom, ty)
}
