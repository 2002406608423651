//! Test fixtures: PNG sources written to scratch directories.

use std::path::{Path, PathBuf};

use led_resample::PixelBuffer;
use tempfile::TempDir;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Encode an RGBA buffer as PNG bytes
pub fn encode_png(buffer: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder =
            png::Encoder::new(&mut out, buffer.width() as u32, buffer.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer
            .write_image_data(buffer.as_bytes())
            .expect("PNG data");
    }
    out
}

/// Write `buffer` as `<dir>/<name>` and return the path
pub fn write_png(dir: &Path, name: &str, buffer: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(buffer)).expect("write fixture PNG");
    path
}

/// Write a YAML config file as `<dir>/ledgrid.yaml`
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("ledgrid.yaml");
    std::fs::write(&path, yaml).expect("write fixture config");
    path
}

pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Uniform opaque red, 4x4
pub fn red_square() -> PixelBuffer {
    PixelBuffer::filled(4, 4, RED).expect("red square")
}

/// 2x2 black/white checkerboard, white at (0,0)
pub fn checkerboard() -> PixelBuffer {
    PixelBuffer::from_fn(2, 2, |x, y| {
        if (x + y) % 2 == 0 {
            WHITE
        } else {
            [0, 0, 0, 255]
        }
    })
    .expect("checkerboard")
}

/// White field with a transparent square in the middle
pub fn white_with_hole(size: usize, hole: usize) -> PixelBuffer {
    let start = (size - hole) / 2;
    let end = start + hole;
    PixelBuffer::from_fn(size, size, |x, y| {
        if (start..end).contains(&x) && (start..end).contains(&y) {
            CLEAR
        } else {
            WHITE
        }
    })
    .expect("white with hole")
}

/// 20x10 landscape: left half red, right half blue
pub fn landscape_split() -> PixelBuffer {
    PixelBuffer::from_fn(20, 10, |x, _| {
        if x < 10 {
            RED
        } else {
            [0, 0, 255, 255]
        }
    })
    .expect("landscape")
}
