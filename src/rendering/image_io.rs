use std::io::Cursor;
use std::path::Path;

use led_resample::PixelBuffer;

use crate::error::GridError;

/// Read a PNG file into an RGBA pixel buffer.
pub fn load_png(path: &Path) -> Result<PixelBuffer, GridError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read source image");
    decode_png(&bytes)
}

/// Decode PNG bytes into an RGBA8 pixel buffer.
///
/// Palette images and sub-byte grayscale are expanded, tRNS becomes alpha,
/// 16-bit channels are stripped to 8 bits. Grayscale and RGB outputs are then
/// widened to RGBA with opaque alpha.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, GridError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| GridError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| GridError::PngDecode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(GridError::UnsupportedImage(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let width = info.width as usize;
    let height = info.height as usize;
    let row_pixels = width * height;

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => {
            let mut out = Vec::with_capacity(row_pixels * 4);
            for px in buf.chunks_exact(3) {
                out.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
            out
        }
        png::ColorType::GrayscaleAlpha => {
            let mut out = Vec::with_capacity(row_pixels * 4);
            for px in buf.chunks_exact(2) {
                out.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
            out
        }
        png::ColorType::Grayscale => {
            let mut out = Vec::with_capacity(row_pixels * 4);
            for &v in &buf {
                out.extend_from_slice(&[v, v, v, 255]);
            }
            out
        }
        png::ColorType::Indexed => {
            return Err(GridError::UnsupportedImage(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width,
        height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(PixelBuffer::new(width, height, rgba)?)
}

/// Largest preview edge in pixels, well inside PNG's 2^31 - 1 limit.
pub const MAX_PREVIEW_SIDE: usize = 8192;

/// Encode a buffer as an RGBA PNG, each pixel replicated `scale` times per
/// axis (nearest neighbour) so a tiny LED grid is visible on screen.
///
/// A scaled edge longer than [`MAX_PREVIEW_SIDE`] is a `PngEncode` error.
pub fn encode_preview_png(buffer: &PixelBuffer, scale: u32) -> Result<Vec<u8>, GridError> {
    let scale = scale.max(1) as usize;
    let out_width = preview_side("width", buffer.width(), scale)?;
    let out_height = preview_side("height", buffer.height(), scale)?;

    let mut data = Vec::with_capacity(out_width * out_height * 4);
    for y in 0..out_height {
        for x in 0..out_width {
            data.extend_from_slice(&buffer.pixel(x / scale, y / scale));
        }
    }

    // both sides are bounded by MAX_PREVIEW_SIDE
    let width = out_width as u32;
    let height = out_height as u32;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| GridError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| GridError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

fn preview_side(what: &str, len: usize, scale: usize) -> Result<usize, GridError> {
    len.checked_mul(scale)
        .filter(|&side| side <= MAX_PREVIEW_SIDE)
        .ok_or_else(|| {
            GridError::PngEncode(format!(
                "preview {what} {len} x {scale} exceeds {MAX_PREVIEW_SIDE} pixels"
            ))
        })
}
