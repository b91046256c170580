//! rasterpaint-core - Core data structures for the rasterpaint library
//!
//! This crate provides the fundamental types shared by the fill engine and
//! the view mapper:
//!
//! - **[`Rgba`]** - RGBA color value type with tolerance comparison
//! - **[`PixelBuffer`] / [`PixelBufferMut`]** - row-major RGBA rasters with
//!   a shared/exclusive ownership split
//! - **[`Error`] / [`Result`]** - the core error type
//!
//! # Examples
//!
//! ```
//! use rasterpaint_core::{PixelBuffer, Rgba};
//!
//! // Take a private editable copy of an immutable source raster
//! let source = PixelBuffer::filled(64, 64, Rgba::WHITE).unwrap();
//! let mut canvas = source.to_mut();
//!
//! canvas.set_pixel(10, 10, Rgba::RED).unwrap();
//! assert_eq!(canvas.get_pixel(10, 10), Some(Rgba::RED));
//! // The source is never mutated
//! assert_eq!(source.get_pixel(10, 10), Some(Rgba::WHITE));
//! ```

mod buffer;
mod color;
mod error;

pub use buffer::{PixelBuffer, PixelBufferMut};
pub use color::Rgba;
pub use error::{Error, Result};
