//! rasterpaint-session - Paint session state
//!
//! Wires the view mapper and the fill engine into a click-to-fill session:
//!
//! - **[`PaintSession`]** - private editable copies of the source art and
//!   outline mask, plus the active fill color
//! - **[`SessionConfig`]** - tolerances, ignore color, mapping options
//!
//! # Examples
//!
//! ```
//! use rasterpaint_core::{PixelBuffer, Rgba};
//! use rasterpaint_session::{PaintSession, SessionConfig};
//! use rasterpaint_view::DisplayRect;
//!
//! let source = PixelBuffer::filled(16, 16, Rgba::WHITE).unwrap();
//! let mut session =
//!     PaintSession::new(&source, None, Rgba::RED, SessionConfig::new()).unwrap();
//!
//! // A pointer click in the middle of a 200x200 view fills the raster
//! let rect = DisplayRect::new(200.0, 200.0);
//! let painted = session.fill_at_pointer((0.0, 0.0), rect).unwrap();
//! assert_eq!(painted, Some(256));
//! ```

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{PaintSession, SessionConfig};

// Re-export the types a session's caller needs
pub use rasterpaint_core;
pub use rasterpaint_fill;
pub use rasterpaint_view;
