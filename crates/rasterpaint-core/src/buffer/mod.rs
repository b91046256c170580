//! Pixel buffer containers
//!
//! The `PixelBuffer` is the fundamental raster type: a row-major grid of
//! [`Rgba`] values with `index = y * width + x`.
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for efficient cloning (shared ownership) and is
//! read-only. To modify pixel data, convert to `PixelBufferMut` via
//! [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`], then convert
//! back with `Into<PixelBuffer>`. `to_mut` deep-copies, which is how a
//! session takes a private editable copy of an immutable source image
//! without ever touching the original.
//!
//! # Invariants
//!
//! - `width > 0` and `height > 0`
//! - `pixels.len() == width * height` for the buffer's whole lifetime

mod access;

use crate::Rgba;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug, Clone)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixel data, length `width * height`
    pixels: Vec<Rgba>,
}

impl BufferData {
    fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Read-only pixel buffer with shared ownership
///
/// Cloning is cheap (reference counted). Mask buffers are passed around as
/// `PixelBuffer` so several readers can hold the same raster at once.
///
/// # Examples
///
/// ```
/// use rasterpaint_core::{PixelBuffer, Rgba};
///
/// let buffer = PixelBuffer::filled(4, 4, Rgba::WHITE).unwrap();
/// assert_eq!(buffer.width(), 4);
/// assert_eq!(buffer.get_pixel(0, 0), Some(Rgba::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new buffer initialized to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a new buffer with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let pixels = vec![color; (width as usize) * (height as usize)];
        Ok(Self {
            inner: Arc::new(BufferData {
                width,
                height,
                pixels,
            }),
        })
    }

    /// Create a buffer from an existing pixel vector.
    ///
    /// The vector is row-major: `pixels[y * width + x]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::SizeMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(BufferData::new(width, height, pixels)?),
        })
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.inner.pixels
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &self.inner.pixels[start..end]
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Convert into a mutable buffer, copying the pixel data.
    ///
    /// The source buffer (and any other clones of it) is left untouched.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Convert into a mutable buffer without copying, if uniquely owned.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when other clones still share the data;
    /// use [`PixelBuffer::to_mut`] to copy instead.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, PixelBuffer> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(PixelBufferMut { inner }),
            Err(inner) => Err(PixelBuffer { inner }),
        }
    }
}

/// Exclusively owned, mutable pixel buffer
///
/// Holds the same invariants as [`PixelBuffer`]. A fill operation borrows
/// a `PixelBufferMut` mutably for the duration of one call, which is the
/// single-writer rule the engine relies on.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.inner.pixels
    }

    /// Check if this buffer has the same dimensions as a read-only one.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.width() && self.inner.height == other.height()
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buffer: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buffer.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(PixelBuffer::new(0, 4).is_err());
        assert!(PixelBuffer::new(4, 0).is_err());
        assert!(PixelBuffer::new(4, 4).is_ok());
    }

    #[test]
    fn test_from_pixels_validates_length() {
        let pixels = vec![Rgba::WHITE; 16];
        assert!(PixelBuffer::from_pixels(4, 4, pixels.clone()).is_ok());
        assert!(matches!(
            PixelBuffer::from_pixels(4, 5, pixels),
            Err(Error::SizeMismatch { expected: 20, actual: 16, .. })
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let mut pixels = vec![Rgba::BLACK; 6];
        pixels[1 * 3 + 2] = Rgba::RED; // (x=2, y=1) in a 3x2 buffer
        let buffer = PixelBuffer::from_pixels(3, 2, pixels).unwrap();

        assert_eq!(buffer.get_pixel(2, 1), Some(Rgba::RED));
        assert_eq!(buffer.row(1)[2], Rgba::RED);
        assert_eq!(buffer.row(0)[2], Rgba::BLACK);
    }

    #[test]
    fn test_to_mut_copies_data() {
        let original = PixelBuffer::filled(2, 2, Rgba::WHITE).unwrap();
        let mut copy = original.to_mut();
        copy.set_pixel(0, 0, Rgba::RED).unwrap();

        // The source is untouched
        assert_eq!(original.get_pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(copy.get_pixel(0, 0), Some(Rgba::RED));
    }

    #[test]
    fn test_try_into_mut_unique_vs_shared() {
        let unique = PixelBuffer::filled(2, 2, Rgba::WHITE).unwrap();
        assert!(unique.try_into_mut().is_ok());

        let shared = PixelBuffer::filled(2, 2, Rgba::WHITE).unwrap();
        let _clone = shared.clone();
        assert!(shared.try_into_mut().is_err());
    }

    #[test]
    fn test_roundtrip_preserves_pixels() {
        let buffer = PixelBuffer::filled(3, 3, Rgba::BLUE).unwrap();
        let mut m = buffer.try_into_mut().unwrap();
        m.set_pixel(1, 1, Rgba::GREEN).unwrap();
        let buffer: PixelBuffer = m.into();

        assert_eq!(buffer.get_pixel(1, 1), Some(Rgba::GREEN));
        assert_eq!(buffer.get_pixel(0, 0), Some(Rgba::BLUE));
    }
}
