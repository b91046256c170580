//! Error types for rasterpaint-fill

use thiserror::Error;

/// Errors that can occur during a fill operation
///
/// Every variant is detected before any pixel is written, so a rejected
/// call leaves the target buffer untouched.
#[derive(Debug, Error)]
pub enum FillError {
    /// Seed coordinate outside the target buffer
    ///
    /// Signaled rather than silently ignored so callers can tell a
    /// "nothing to do" click apart from bad input.
    #[error("seed out of bounds: ({x}, {y}) in {width}x{height}")]
    SeedOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Mask buffer dimensions differ from the target buffer
    #[error("mask dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    MaskDimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for fill operations
pub type FillResult<T> = Result<T, FillError>;
