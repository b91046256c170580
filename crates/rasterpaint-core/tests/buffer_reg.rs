//! Pixel buffer regression tests
//!
//! Covers the layout invariants and the shared/exclusive ownership
//! conversions from the outside, the way downstream crates use them.

use rasterpaint_core::{Error, PixelBuffer, Rgba};
use rasterpaint_test::{count_matching, first_difference, from_rows, uniform};

// ============================================================================
// Construction invariants
// ============================================================================

#[test]
fn test_length_invariant_holds_for_all_constructors() {
    assert_eq!(PixelBuffer::new(5, 3).unwrap().pixel_count(), 15);
    assert_eq!(uniform(7, 2, Rgba::RED).pixel_count(), 14);
    assert_eq!(
        PixelBuffer::from_pixels(2, 2, vec![Rgba::BLACK; 4])
            .unwrap()
            .pixel_count(),
        4
    );
}

#[test]
fn test_zero_dimension_rejected() {
    assert!(matches!(
        PixelBuffer::filled(0, 10, Rgba::WHITE),
        Err(Error::InvalidDimension { width: 0, height: 10 })
    ));
}

#[test]
fn test_wrong_pixel_count_rejected() {
    assert!(matches!(
        PixelBuffer::from_pixels(3, 3, vec![Rgba::WHITE; 8]),
        Err(Error::SizeMismatch { .. })
    ));
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_index_is_row_major() {
    let buffer = from_rows(&[
        &[Rgba::RED, Rgba::GREEN, Rgba::BLUE],
        &[Rgba::WHITE, Rgba::BLACK, Rgba::TRANSPARENT],
    ]);

    // index = y * width + x
    assert_eq!(buffer.pixels()[0], Rgba::RED);
    assert_eq!(buffer.pixels()[1 * 3 + 1], Rgba::BLACK);
    assert_eq!(buffer.get_pixel(2, 0), Some(Rgba::BLUE));
    assert_eq!(buffer.row(1)[0], Rgba::WHITE);
}

// ============================================================================
// Ownership conversions
// ============================================================================

#[test]
fn test_clones_share_until_mutated() {
    let a = uniform(4, 4, Rgba::WHITE);
    let b = a.clone();
    assert_eq!(a.ref_count(), 2);

    // Mutating through a deep copy leaves both clones intact
    let mut m = b.to_mut();
    m.set_pixel(0, 0, Rgba::RED).unwrap();
    assert_eq!(first_difference(a.pixels(), b.pixels()), None);
    assert_eq!(count_matching(m.pixels(), Rgba::RED), 1);
}

#[test]
fn test_try_into_mut_respects_sharing() {
    let a = uniform(2, 2, Rgba::WHITE);
    let b = a.clone();

    // Shared: conversion hands the buffer back
    let a = a.try_into_mut().unwrap_err();
    drop(b);
    // Unique again: conversion succeeds without copying
    assert!(a.try_into_mut().is_ok());
}
