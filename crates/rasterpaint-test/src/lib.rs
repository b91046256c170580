//! rasterpaint-test - Test support for the rasterpaint workspace
//!
//! Builders for small synthetic rasters and buffer comparison helpers,
//! shared by the member crates' regression tests. No file I/O: every
//! fixture is constructed in memory.
//!
//! # Usage
//!
//! ```
//! use rasterpaint_core::Rgba;
//! use rasterpaint_test::{uniform, count_matching};
//!
//! let buffer = uniform(4, 4, Rgba::WHITE);
//! assert_eq!(count_matching(buffer.pixels(), Rgba::WHITE), 16);
//! ```

use rasterpaint_core::{PixelBuffer, Rgba};

/// Build a buffer with every pixel set to `color`.
///
/// # Panics
///
/// Panics if `width` or `height` is 0. Test fixtures are always
/// constructed with valid dimensions.
pub fn uniform(width: u32, height: u32, color: Rgba) -> PixelBuffer {
    PixelBuffer::filled(width, height, color).unwrap()
}

/// Build a uniform buffer with one full-height column overridden.
///
/// Useful for mask fixtures: a protected column that splits the raster
/// into two halves.
///
/// # Panics
///
/// Panics if the dimensions are invalid or `column_x >= width`.
pub fn with_column(width: u32, height: u32, base: Rgba, column_x: u32, column: Rgba) -> PixelBuffer {
    assert!(column_x < width, "column_x {column_x} >= width {width}");
    let mut buffer = PixelBuffer::filled(width, height, base)
        .unwrap()
        .try_into_mut()
        .unwrap();
    for y in 0..height {
        buffer.set_pixel_unchecked(column_x, y, column);
    }
    buffer.into()
}

/// Build a buffer from rows of colors, top row first.
///
/// # Panics
///
/// Panics if `rows` is empty or the rows have unequal lengths.
pub fn from_rows(rows: &[&[Rgba]]) -> PixelBuffer {
    let height = rows.len() as u32;
    let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
    for row in rows {
        assert_eq!(row.len() as u32, width, "rows must have equal lengths");
        pixels.extend_from_slice(row);
    }
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// Count the pixels exactly equal to `color`.
pub fn count_matching(pixels: &[Rgba], color: Rgba) -> usize {
    pixels.iter().filter(|p| **p == color).count()
}

/// Index of the first pixel where the two slices differ, if any.
///
/// Returns `None` when the buffers are identical, so
/// `assert_eq!(first_difference(a, b), None)` reports the offending
/// index on failure.
pub fn first_difference(a: &[Rgba], b: &[Rgba]) -> Option<usize> {
    assert_eq!(a.len(), b.len(), "buffers must have equal pixel counts");
    a.iter().zip(b.iter()).position(|(pa, pb)| pa != pb)
}
