//! Flood fill engine
//!
//! Iterative, stack-based region fill over an RGBA pixel buffer. The fill
//! repaints every 4-connected pixel that matches the seed's original color
//! within a tolerance, optionally skipping pixels a secondary mask buffer
//! marks as protected (line-art outlines, backgrounds).
//!
//! The engine is deliberately iterative: recursion depth would scale with
//! region size, and a full-raster region on a large image overflows the
//! call stack.

use crate::error::{FillError, FillResult};
use rasterpaint_core::{PixelBuffer, PixelBufferMut, Rgba};

/// Options for a fill operation
#[derive(Debug, Clone, Copy)]
pub struct FillOptions {
    /// Per-channel tolerance for matching the seed's original color
    pub tolerance: u8,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self { tolerance: 0 }
    }
}

impl FillOptions {
    /// Create options with the specified tolerance
    pub fn new(tolerance: u8) -> Self {
        Self { tolerance }
    }

    /// Set the fill tolerance
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Protected zones for a fill operation
///
/// The mask buffer is read at the same coordinates as the target: wherever
/// the *mask* pixel matches `ignore_color` within `tolerance`, the target
/// pixel is never painted, regardless of its current color. Protection is
/// keyed by the underlying artwork, not by the paint applied so far, so a
/// region stays protected even after the paint layer on top of it changes.
#[derive(Debug, Clone, Copy)]
pub struct IgnoreMask<'a> {
    /// Mask raster, same dimensions as the fill target
    pub buffer: &'a PixelBuffer,
    /// Color marking protected pixels in the mask
    pub ignore_color: Rgba,
    /// Per-channel tolerance for the protection match
    pub tolerance: u8,
}

impl<'a> IgnoreMask<'a> {
    /// Create a mask with exact-match protection (tolerance 0)
    pub fn new(buffer: &'a PixelBuffer, ignore_color: Rgba) -> Self {
        Self {
            buffer,
            ignore_color,
            tolerance: 0,
        }
    }

    /// Set the protection tolerance
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Flood fill from a seed point
///
/// Repaints the 4-connected region around `(seed_x, seed_y)` whose pixels
/// match the seed's original color within `options.tolerance`, writing
/// `fill_color` in place. Diagonal-only contact never joins regions.
///
/// The fill mutates `target` directly and returns the number of pixels
/// painted. The outcome depends only on the buffer contents, the seed, and
/// the colors and tolerances, never on traversal order: each eligible pixel
/// is painted exactly once, and painting it is what stops re-visits.
///
/// If the seed's original color already matches `fill_color` within the
/// tolerance, the call returns `Ok(0)` without scanning the buffer. This is
/// not just an optimization: painted pixels must stop matching the original
/// color, or the region could be re-visited forever.
///
/// # Arguments
///
/// * `target` - Buffer to paint, borrowed exclusively for the call
/// * `seed_x`, `seed_y` - Seed coordinate
/// * `fill_color` - Color to paint the region with
/// * `options` - Fill tolerance
/// * `mask` - Optional protected zones (see [`IgnoreMask`])
///
/// # Returns
///
/// The number of pixels painted.
///
/// # Errors
///
/// Returns [`FillError::SeedOutOfBounds`] if the seed lies outside the
/// target, or [`FillError::MaskDimensionMismatch`] if the mask dimensions
/// differ from the target's. Both are checked before any pixel is written,
/// so a rejected call never partially applies.
pub fn flood_fill(
    target: &mut PixelBufferMut,
    seed_x: u32,
    seed_y: u32,
    fill_color: Rgba,
    options: &FillOptions,
    mask: Option<&IgnoreMask<'_>>,
) -> FillResult<u32> {
    let width = target.width();
    let height = target.height();

    if seed_x >= width || seed_y >= height {
        return Err(FillError::SeedOutOfBounds {
            x: seed_x,
            y: seed_y,
            width,
            height,
        });
    }

    if let Some(mask) = mask {
        if mask.buffer.width() != width || mask.buffer.height() != height {
            return Err(FillError::MaskDimensionMismatch {
                expected: (width, height),
                actual: (mask.buffer.width(), mask.buffer.height()),
            });
        }
    }

    let original = target.get_pixel_unchecked(seed_x, seed_y);

    // Required for termination, not just speed: a painted pixel must stop
    // matching `original`, which only holds when fill_color itself doesn't.
    if original.matches(fill_color, options.tolerance) {
        return Ok(0);
    }

    let mut painted = 0u32;
    // Signed coordinates so neighbors can be pushed unconditionally;
    // bounds and eligibility are re-checked on pop.
    let mut stack: Vec<(i64, i64)> = vec![(seed_x as i64, seed_y as i64)];

    while let Some((px, py)) = stack.pop() {
        if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
            continue;
        }
        let (x, y) = (px as u32, py as u32);

        // Already painted, or never part of the contiguous region
        if !target.get_pixel_unchecked(x, y).matches(original, options.tolerance) {
            continue;
        }

        // Protected by the mask, independent of the current paint
        if let Some(mask) = mask {
            if mask
                .buffer
                .get_pixel_unchecked(x, y)
                .matches(mask.ignore_color, mask.tolerance)
            {
                continue;
            }
        }

        target.set_pixel_unchecked(x, y, fill_color);
        painted += 1;

        stack.push((px - 1, py));
        stack.push((px + 1, py));
        stack.push((px, py - 1));
        stack.push((px, py + 1));
    }

    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_mut(width: u32, height: u32, color: Rgba) -> PixelBufferMut {
        PixelBuffer::filled(width, height, color)
            .unwrap()
            .try_into_mut()
            .unwrap()
    }

    #[test]
    fn test_fill_whole_uniform_buffer() {
        let mut target = uniform_mut(4, 4, Rgba::WHITE);
        let painted = flood_fill(&mut target, 0, 0, Rgba::RED, &FillOptions::default(), None).unwrap();

        assert_eq!(painted, 16);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(target.get_pixel_unchecked(x, y), Rgba::RED);
            }
        }
    }

    #[test]
    fn test_fill_already_matching_is_noop() {
        let mut target = uniform_mut(4, 4, Rgba::RED);
        let painted = flood_fill(&mut target, 2, 2, Rgba::RED, &FillOptions::default(), None).unwrap();
        assert_eq!(painted, 0);
    }

    #[test]
    fn test_fill_stops_at_color_boundary() {
        // Left half white, right half blue; seed in the left half
        let mut target = uniform_mut(6, 2, Rgba::WHITE);
        for y in 0..2 {
            for x in 3..6 {
                target.set_pixel_unchecked(x, y, Rgba::BLUE);
            }
        }

        let painted = flood_fill(&mut target, 0, 0, Rgba::RED, &FillOptions::default(), None).unwrap();
        assert_eq!(painted, 6);
        assert_eq!(target.get_pixel_unchecked(2, 1), Rgba::RED);
        assert_eq!(target.get_pixel_unchecked(3, 1), Rgba::BLUE);
    }

    #[test]
    fn test_fill_is_four_connected() {
        // Two white regions touching only at a diagonal:
        // W B
        // B W
        let mut target = uniform_mut(2, 2, Rgba::BLACK);
        target.set_pixel_unchecked(0, 0, Rgba::WHITE);
        target.set_pixel_unchecked(1, 1, Rgba::WHITE);

        let painted = flood_fill(&mut target, 0, 0, Rgba::RED, &FillOptions::default(), None).unwrap();
        assert_eq!(painted, 1);
        assert_eq!(target.get_pixel_unchecked(1, 1), Rgba::WHITE);
    }

    #[test]
    fn test_fill_with_tolerance_crosses_near_colors() {
        let mut target = uniform_mut(3, 1, Rgba::new(100, 100, 100, 255));
        target.set_pixel_unchecked(1, 0, Rgba::new(108, 100, 100, 255));

        // Tolerance 10 lets the fill walk through the slightly-off pixel
        let painted = flood_fill(&mut target, 0, 0, Rgba::RED, &FillOptions::new(10), None).unwrap();
        assert_eq!(painted, 3);
    }

    #[test]
    fn test_seed_out_of_bounds() {
        let mut target = uniform_mut(4, 4, Rgba::WHITE);
        let err = flood_fill(&mut target, 5, 5, Rgba::RED, &FillOptions::default(), None).unwrap_err();
        assert!(matches!(
            err,
            FillError::SeedOutOfBounds { x: 5, y: 5, width: 4, height: 4 }
        ));
        // Nothing was painted
        assert!(target.pixels().iter().all(|p| *p == Rgba::WHITE));
    }

    #[test]
    fn test_mask_dimension_mismatch_rejected_before_mutation() {
        let mut target = uniform_mut(4, 4, Rgba::WHITE);
        let mask_buffer = PixelBuffer::filled(3, 4, Rgba::BLACK).unwrap();
        let mask = IgnoreMask::new(&mask_buffer, Rgba::BLACK);

        let err = flood_fill(
            &mut target,
            0,
            0,
            Rgba::RED,
            &FillOptions::default(),
            Some(&mask),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FillError::MaskDimensionMismatch {
                expected: (4, 4),
                actual: (3, 4),
            }
        ));
        assert!(target.pixels().iter().all(|p| *p == Rgba::WHITE));
    }

    #[test]
    fn test_masked_pixels_are_never_painted() {
        let mut target = uniform_mut(4, 4, Rgba::WHITE);
        // Mask protects column x=2
        let mut mask_buffer = PixelBuffer::filled(4, 4, Rgba::WHITE)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in 0..4 {
            mask_buffer.set_pixel_unchecked(2, y, Rgba::BLACK);
        }
        let mask_buffer: PixelBuffer = mask_buffer.into();
        let mask = IgnoreMask::new(&mask_buffer, Rgba::BLACK);

        let painted = flood_fill(
            &mut target,
            0,
            0,
            Rgba::RED,
            &FillOptions::default(),
            Some(&mask),
        )
        .unwrap();

        // Columns 0-1 painted; the protected column blocks propagation,
        // so column 3 stays white even though its color matched
        assert_eq!(painted, 8);
        for y in 0..4 {
            assert_eq!(target.get_pixel_unchecked(0, y), Rgba::RED);
            assert_eq!(target.get_pixel_unchecked(1, y), Rgba::RED);
            assert_eq!(target.get_pixel_unchecked(2, y), Rgba::WHITE);
            assert_eq!(target.get_pixel_unchecked(3, y), Rgba::WHITE);
        }
    }
}
