//! Pointer-to-pixel mapping
//!
//! A raster shown inside a display rectangle of a different aspect ratio is
//! letterboxed: scaled uniformly to the largest size that fits, then
//! centered, leaving padding on one axis. Mapping a pointer position back
//! to a texel therefore has to undo both the centering offset and the
//! display scale.
//!
//! Pointer positions arrive in the display rectangle's local space with the
//! origin at the rectangle's center, which is the convention UI layers
//! deliver for hit-tested elements.

/// On-screen rectangle the raster is displayed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    /// Rectangle width in display units
    pub width: f32,
    /// Rectangle height in display units
    pub height: f32,
}

impl DisplayRect {
    /// Create a display rectangle
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The displayed sub-rectangle of a letterboxed raster
///
/// Offsets are measured from the display rectangle's top-left corner to
/// the top-left corner of the visible image area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedArea {
    /// Displayed image width
    pub width: f32,
    /// Displayed image height
    pub height: f32,
    /// Horizontal padding on the left edge
    pub x_offset: f32,
    /// Vertical padding on the top edge
    pub y_offset: f32,
}

/// What to do when rounding pushes a mapped coordinate past the texture edge
///
/// A pointer on the very last displayed row or column can round to a texel
/// index one past the end. The two source behaviors disagreed on the
/// answer, so it is an explicit policy here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapPolicy {
    /// Pull the coordinate back into range (safer for UI use)
    #[default]
    Clamp,
    /// Treat the result as a miss and return no coordinate
    Reject,
}

/// Options for pointer mapping
#[derive(Debug, Clone, Copy, Default)]
pub struct MapOptions {
    /// Edge-rounding policy
    pub policy: MapPolicy,
    /// Flip the Y axis, for display spaces with a bottom-left origin
    /// (raster rows grow downward from the top-left)
    pub flip_y: bool,
}

impl MapOptions {
    /// Create options with the given policy
    pub fn new(policy: MapPolicy) -> Self {
        Self {
            policy,
            flip_y: false,
        }
    }

    /// Set the edge-rounding policy
    pub fn with_policy(mut self, policy: MapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set Y-axis flipping
    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }
}

/// Compute the letterboxed display area of a raster inside a rectangle.
///
/// The raster is scaled uniformly to the largest size that fits and
/// centered. Whichever of width and height is the constraining dimension
/// is filled exactly; the other axis gets equal padding on both sides.
///
/// # Arguments
///
/// * `texture_width`, `texture_height` - Raster dimensions (non-zero)
/// * `rect` - The display rectangle
pub fn letterbox_fit(texture_width: u32, texture_height: u32, rect: DisplayRect) -> FittedArea {
    let texture_aspect = texture_width as f32 / texture_height as f32;
    let rect_aspect = rect.width / rect.height;

    let (width, height) = if texture_aspect > rect_aspect {
        (rect.width, rect.width / texture_aspect)
    } else {
        (rect.height * texture_aspect, rect.height)
    };

    FittedArea {
        width,
        height,
        x_offset: (rect.width - width) * 0.5,
        y_offset: (rect.height - height) * 0.5,
    }
}

/// Map a pointer position to a texel coordinate.
///
/// `pointer` is in the display rectangle's local space, origin at the
/// rectangle's center, X growing right and Y growing down (set
/// `options.flip_y` for bottom-left-origin display spaces).
///
/// Returns `None` when the pointer lies outside the display rectangle,
/// when the texture has a zero dimension, or - under
/// [`MapPolicy::Reject`] - when the rounded coordinate falls outside the
/// texture (a pointer in the letterbox padding, or rounding spill at the
/// far edge). Under [`MapPolicy::Clamp`] any in-rectangle pointer maps to
/// the nearest valid texel.
///
/// # Arguments
///
/// * `pointer` - Pointer position, rect-local, origin at the center
/// * `rect` - The display rectangle
/// * `texture_width`, `texture_height` - Raster dimensions
/// * `options` - Policy and axis options
pub fn map_to_pixel(
    pointer: (f32, f32),
    rect: DisplayRect,
    texture_width: u32,
    texture_height: u32,
    options: &MapOptions,
) -> Option<(u32, u32)> {
    if texture_width == 0 || texture_height == 0 {
        return None;
    }

    let (local_x, local_y) = pointer;
    if local_x.abs() > rect.width * 0.5 || local_y.abs() > rect.height * 0.5 {
        return None;
    }

    let fitted = letterbox_fit(texture_width, texture_height, rect);

    // Re-anchor at the rectangle's top-left corner, then strip the
    // letterbox padding and undo the display scale
    let rect_x = rect.width * 0.5 + local_x;
    let rect_y = rect.height * 0.5 + local_y;

    let x = (rect_x - fitted.x_offset) * texture_width as f32 / fitted.width;
    let mut y = (rect_y - fitted.y_offset) * texture_height as f32 / fitted.height;
    if options.flip_y {
        y = texture_height as f32 - y;
    }

    let px = x.round();
    let py = y.round();
    let max_x = (texture_width - 1) as f32;
    let max_y = (texture_height - 1) as f32;

    match options.policy {
        MapPolicy::Clamp => Some((
            px.clamp(0.0, max_x) as u32,
            py.clamp(0.0, max_y) as u32,
        )),
        MapPolicy::Reject => {
            if px < 0.0 || py < 0.0 || px > max_x || py > max_y {
                None
            } else {
                Some((px as u32, py as u32))
            }
        }
    }
}
