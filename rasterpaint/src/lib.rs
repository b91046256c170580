//! Rasterpaint - Bucket-fill painting for RGBA rasters
//!
//! A coloring-book style paint core: tolerance-based flood fill over a
//! pixel buffer, driven by a seed pixel and optionally constrained by an
//! outline mask, plus the pointer-to-pixel mapping for letterboxed
//! display.
//!
//! # Overview
//!
//! - Pixel buffers with a shared/exclusive ownership split
//! - 4-connected flood fill with per-channel color tolerance
//! - Ignore masks that protect line art from being painted over
//! - Pointer mapping from a centered display rectangle to texel
//!   coordinates, with a clamp-or-reject edge policy
//! - A paint session tying it all together: private copies of the source
//!   art, the active fill color, click-to-fill
//!
//! # Example
//!
//! ```
//! use rasterpaint::{PixelBuffer, Rgba};
//! use rasterpaint::fill::{FillOptions, flood_fill};
//!
//! let mut canvas = PixelBuffer::filled(32, 32, Rgba::WHITE)
//!     .unwrap()
//!     .try_into_mut()
//!     .unwrap();
//!
//! let painted = flood_fill(&mut canvas, 16, 16, Rgba::BLUE, &FillOptions::default(), None).unwrap();
//! assert_eq!(painted, 1024);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterpaint_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterpaint_fill as fill;
pub use rasterpaint_session as session;
pub use rasterpaint_view as view;
