//! Error types for rasterpaint-session

use thiserror::Error;

/// Errors that can occur while creating or driving a paint session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Fill engine error
    #[error("fill error: {0}")]
    Fill(#[from] rasterpaint_fill::FillError),

    /// Mask buffer dimensions differ from the artwork
    #[error("mask dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    MaskDimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A mask buffer was supplied without an ignore color to match it against
    #[error("mask buffer supplied without an ignore color")]
    MissingIgnoreColor,
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
