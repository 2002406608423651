//! RGBA pixel buffer and the geometry types that address it.
//!
//! [`PixelBuffer`] is the only buffer type that crosses the crate boundary.
//! Each pipeline stage takes one by reference and returns a freshly
//! allocated one, so no buffer is ever aliased between stages.

use crate::api::ResampleError;

/// A rectangular grid of RGBA8 samples, row-major, origin top-left.
///
/// # Example
///
/// ```
/// use led_resample::PixelBuffer;
///
/// let buffer = PixelBuffer::filled(2, 2, [255, 0, 0, 255]).unwrap();
/// assert_eq!(buffer.pixel(1, 1), [255, 0, 0, 255]);
/// assert_eq!(buffer.as_bytes().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// Fails with [`ResampleError::InvalidDimensions`] if either dimension is
    /// zero and with [`ResampleError::BufferLength`] if `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ResampleError> {
        let expected = byte_len("buffer", width, height)?;
        if data.len() != expected {
            return Err(ResampleError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel is `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, ResampleError> {
        let len = byte_len("buffer", width, height)?;
        let data = rgba.repeat(len / 4);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, ResampleError>
    where
        F: FnMut(usize, usize) -> [u8; 4],
    {
        let mut data = Vec::with_capacity(byte_len("buffer", width, height)?);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its RGBA bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        let i = (y * self.width + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Iterate over RGBA pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Mutable per-pixel access for stages that own their output buffer.
    pub(crate) fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        self.data.chunks_exact_mut(4)
    }

    /// Copy the square `crop` out of this buffer into a new buffer.
    pub fn crop(&self, crop: CropRegion) -> Result<PixelBuffer, ResampleError> {
        crop.validate(self.width, self.height)?;
        let row_bytes = crop.size * 4;
        let mut data = Vec::with_capacity(crop.size * row_bytes);
        for y in crop.y..crop.y + crop.size {
            let start = (y * self.width + crop.x) * 4;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Ok(PixelBuffer {
            width: crop.size,
            height: crop.size,
            data,
        })
    }
}

/// A square sub-rectangle of a source buffer, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRegion {
    /// Left edge
    pub x: usize,
    /// Top edge
    pub y: usize,
    /// Edge length of the square
    pub size: usize,
}

impl CropRegion {
    /// Create a crop region. Bounds are checked against a source later.
    #[inline]
    pub const fn new(x: usize, y: usize, size: usize) -> Self {
        Self { x, y, size }
    }

    /// The largest square centered in a `width x height` source.
    ///
    /// # Example
    ///
    /// ```
    /// use led_resample::CropRegion;
    ///
    /// assert_eq!(CropRegion::centered(640, 480), CropRegion::new(80, 0, 480));
    /// ```
    pub fn centered(width: usize, height: usize) -> Self {
        let size = width.min(height);
        Self {
            x: (width - size) / 2,
            y: (height - size) / 2,
            size,
        }
    }

    /// Check the crop against a `src_width x src_height` source.
    ///
    /// A zero-size crop is [`ResampleError::DegenerateCrop`]; a crop that
    /// leaves the source is [`ResampleError::InvalidDimensions`].
    pub fn validate(&self, src_width: usize, src_height: usize) -> Result<(), ResampleError> {
        if self.size == 0 {
            return Err(ResampleError::DegenerateCrop);
        }
        let fits_x = self
            .x
            .checked_add(self.size)
            .is_some_and(|right| right <= src_width);
        let fits_y = self
            .y
            .checked_add(self.size)
            .is_some_and(|bottom| bottom <= src_height);
        if !fits_x || !fits_y {
            return Err(ResampleError::invalid_dimensions(format!(
                "crop {}x{}+{}+{} outside {}x{} source",
                self.size, self.size, self.x, self.y, src_width, src_height
            )));
        }
        Ok(())
    }
}

/// Destination cell count, one cell per physical LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetGrid {
    /// Cells per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl TargetGrid {
    /// Create a target grid, rejecting zero and overflowing dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, ResampleError> {
        byte_len("target", width, height)?;
        Ok(Self { width, height })
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True if the grid has no cells (only possible via direct construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn validate(&self) -> Result<(), ResampleError> {
        byte_len("target", self.width, self.height).map(|_| ())
    }
}

fn check_dimensions(
    what: &str,
    width: usize,
    height: usize,
) -> Result<(), ResampleError> {
    if width == 0 {
        return Err(ResampleError::invalid_dimensions(format!(
            "{what} width is zero"
        )));
    }
    if height == 0 {
        return Err(ResampleError::invalid_dimensions(format!(
            "{what} height is zero"
        )));
    }
    Ok(())
}

/// RGBA byte count of a `width x height` buffer, rejecting zero sizes and
/// sizes that overflow `usize`.
pub(crate) fn byte_len(what: &str, width: usize, height: usize) -> Result<usize, ResampleError> {
    check_dimensions(what, width, height)?;
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| {
            ResampleError::invalid_dimensions(format!(
                "{what} {width}x{height} exceeds addressable memory"
            ))
        })
}
