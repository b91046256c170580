//! rasterpaint-fill - Flood fill engine
//!
//! Tolerance-based bucket fill over RGBA pixel buffers:
//!
//! - **Region fill** - iterative 4-connected flood fill from a seed pixel
//! - **Tolerance matching** - approximate color equality per channel
//! - **Ignore masks** - a secondary raster whose matching pixels are
//!   protected from painting, independent of the paint layer's contents
//!
//! # Examples
//!
//! ## Filling a region
//!
//! ```
//! use rasterpaint_core::{PixelBuffer, Rgba};
//! use rasterpaint_fill::{FillOptions, flood_fill};
//!
//! let mut canvas = PixelBuffer::filled(16, 16, Rgba::WHITE)
//!     .unwrap()
//!     .try_into_mut()
//!     .unwrap();
//!
//! let painted = flood_fill(&mut canvas, 8, 8, Rgba::RED, &FillOptions::default(), None).unwrap();
//! assert_eq!(painted, 256);
//! ```
//!
//! ## Protecting line art with a mask
//!
//! ```
//! use rasterpaint_core::{PixelBuffer, Rgba};
//! use rasterpaint_fill::{FillOptions, IgnoreMask, flood_fill};
//!
//! let outline = PixelBuffer::filled(8, 8, Rgba::WHITE).unwrap();
//! let mut paint = outline.to_mut();
//!
//! let mask = IgnoreMask::new(&outline, Rgba::BLACK).with_tolerance(16);
//! flood_fill(&mut paint, 0, 0, Rgba::GREEN, &FillOptions::new(8), Some(&mask)).unwrap();
//! ```

mod engine;
mod error;

pub use engine::{FillOptions, IgnoreMask, flood_fill};
pub use error::{FillError, FillResult};

// Re-export core types
pub use rasterpaint_core;
