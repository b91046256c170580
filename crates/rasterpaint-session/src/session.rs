//! Paint session state
//!
//! A session owns everything one editing run needs: a private mutable copy
//! of the artwork, an optional read-only outline mask copied alongside it,
//! the active fill color, and the tolerances. The source rasters handed to
//! [`PaintSession::new`] are never written to.
//!
//! The "current fill color" is deliberately explicit state on the session
//! with a getter and a setter, rather than something ambient the palette
//! UI pokes at from a callback.

use crate::error::{SessionError, SessionResult};
use rasterpaint_core::{PixelBuffer, PixelBufferMut, Rgba};
use rasterpaint_fill::{FillOptions, IgnoreMask, flood_fill};
use rasterpaint_view::{DisplayRect, MapOptions, map_to_pixel};

/// Session-wide fill and mapping configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Per-channel tolerance for region matching
    pub fill_tolerance: u8,
    /// Mask color marking protected pixels; required when a mask buffer
    /// is supplied
    pub ignore_color: Option<Rgba>,
    /// Per-channel tolerance for the protection match
    pub ignore_tolerance: u8,
    /// Pointer mapping options
    pub map: MapOptions,
}

impl SessionConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill tolerance
    pub fn with_fill_tolerance(mut self, tolerance: u8) -> Self {
        self.fill_tolerance = tolerance;
        self
    }

    /// Set the protected mask color and its tolerance
    pub fn with_ignore_color(mut self, color: Rgba, tolerance: u8) -> Self {
        self.ignore_color = Some(color);
        self.ignore_tolerance = tolerance;
        self
    }

    /// Set the pointer mapping options
    pub fn with_map(mut self, map: MapOptions) -> Self {
        self.map = map;
        self
    }
}

/// One editing session over a copied artwork
///
/// # Examples
///
/// ```
/// use rasterpaint_core::{PixelBuffer, Rgba};
/// use rasterpaint_session::{PaintSession, SessionConfig};
///
/// let source = PixelBuffer::filled(8, 8, Rgba::WHITE).unwrap();
/// let mut session =
///     PaintSession::new(&source, None, Rgba::RED, SessionConfig::new()).unwrap();
///
/// let painted = session.fill_at(0, 0).unwrap();
/// assert_eq!(painted, 64);
/// // The source asset is untouched
/// assert_eq!(source.get_pixel(0, 0), Some(Rgba::WHITE));
/// ```
#[derive(Debug)]
pub struct PaintSession {
    art: PixelBufferMut,
    mask: Option<PixelBuffer>,
    fill_color: Rgba,
    config: SessionConfig,
}

impl PaintSession {
    /// Start a session by copying the source rasters.
    ///
    /// `source_art` is deep-copied into the session's editable artwork.
    /// `source_mask`, when present, is kept as a read-only raster of
    /// protected zones; its shared-ownership clone is cheap.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MaskDimensionMismatch`] if the mask and
    /// artwork dimensions differ, or [`SessionError::MissingIgnoreColor`]
    /// if a mask buffer is supplied while `config.ignore_color` is unset.
    pub fn new(
        source_art: &PixelBuffer,
        source_mask: Option<&PixelBuffer>,
        initial_color: Rgba,
        config: SessionConfig,
    ) -> SessionResult<Self> {
        if let Some(mask) = source_mask {
            if !mask.sizes_equal(source_art) {
                return Err(SessionError::MaskDimensionMismatch {
                    expected: (source_art.width(), source_art.height()),
                    actual: (mask.width(), mask.height()),
                });
            }
            if config.ignore_color.is_none() {
                return Err(SessionError::MissingIgnoreColor);
            }
        }

        Ok(Self {
            art: source_art.to_mut(),
            mask: source_mask.cloned(),
            fill_color: initial_color,
            config,
        })
    }

    /// Get the active fill color.
    #[inline]
    pub fn fill_color(&self) -> Rgba {
        self.fill_color
    }

    /// Set the active fill color, used by subsequent fills.
    ///
    /// This is the palette/picker boundary: the host UI calls it when the
    /// user selects a color.
    pub fn set_fill_color(&mut self, color: Rgba) {
        self.fill_color = color;
    }

    /// Get the artwork width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.art.width()
    }

    /// Get the artwork height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.art.height()
    }

    /// Read access to the edited artwork.
    ///
    /// The host pushes this buffer to the display in one batched commit
    /// after each fill; there is no per-pixel display write path.
    #[inline]
    pub fn art(&self) -> &PixelBufferMut {
        &self.art
    }

    /// Fill at a pixel coordinate with the active color.
    ///
    /// Returns the number of pixels painted. Callers that treat an
    /// out-of-bounds click as "nothing to do" can match on
    /// [`rasterpaint_fill::FillError::SeedOutOfBounds`].
    ///
    /// # Errors
    ///
    /// Propagates the fill engine's errors; the artwork is untouched on
    /// any error.
    pub fn fill_at(&mut self, x: u32, y: u32) -> SessionResult<u32> {
        let options = FillOptions::new(self.config.fill_tolerance);
        let mask = match (&self.mask, self.config.ignore_color) {
            (Some(buffer), Some(ignore_color)) => Some(
                IgnoreMask::new(buffer, ignore_color).with_tolerance(self.config.ignore_tolerance),
            ),
            _ => None,
        };

        let painted = flood_fill(
            &mut self.art,
            x,
            y,
            self.fill_color,
            &options,
            mask.as_ref(),
        )?;
        Ok(painted)
    }

    /// Fill at a pointer position in a display rectangle.
    ///
    /// Maps the pointer through the session's [`MapOptions`] and fills at
    /// the resulting pixel. Returns `Ok(None)` when the pointer misses the
    /// rectangle (or, under the reject policy, the displayed image), and
    /// `Ok(Some(painted))` after a fill.
    ///
    /// # Errors
    ///
    /// Propagates fill engine errors for a mapped coordinate the engine
    /// rejects; the session never clamps on its own beyond what the
    /// configured mapping policy does.
    pub fn fill_at_pointer(
        &mut self,
        pointer: (f32, f32),
        rect: DisplayRect,
    ) -> SessionResult<Option<u32>> {
        let Some((x, y)) = map_to_pixel(
            pointer,
            rect,
            self.art.width(),
            self.art.height(),
            &self.config.map,
        ) else {
            return Ok(None);
        };

        self.fill_at(x, y).map(Some)
    }

    /// Finish the session, handing the edited artwork back.
    pub fn into_art(self) -> PixelBuffer {
        self.art.into()
    }
}
