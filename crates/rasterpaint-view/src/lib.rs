//! rasterpaint-view - Display-space mapping
//!
//! Converts pointer positions in a letterboxed display rectangle back to
//! raster texel coordinates:
//!
//! - **[`letterbox_fit`]** - the displayed sub-rectangle of a raster under
//!   aspect-preserving scale-to-fit
//! - **[`map_to_pixel`]** - pointer position to texel coordinate, with a
//!   configurable edge policy
//!
//! # Examples
//!
//! ```
//! use rasterpaint_view::{DisplayRect, MapOptions, map_to_pixel};
//!
//! // A 10x10 raster shown in a 100x100 rectangle; the pointer sits at
//! // the rectangle's center
//! let rect = DisplayRect::new(100.0, 100.0);
//! let texel = map_to_pixel((0.0, 0.0), rect, 10, 10, &MapOptions::default());
//! assert_eq!(texel, Some((5, 5)));
//!
//! // Outside the rectangle there is no texel to hit
//! assert_eq!(map_to_pixel((80.0, 0.0), rect, 10, 10, &MapOptions::default()), None);
//! ```

mod mapper;

pub use mapper::{DisplayRect, FittedArea, MapOptions, MapPolicy, letterbox_fit, map_to_pixel};
