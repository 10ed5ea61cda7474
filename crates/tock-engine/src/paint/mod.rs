//! Paint model shared between widgets and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources for filling geometry
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Paint source for filling geometry.
///
/// Every draw command owns its paint value; there is no shared "current paint"
/// that one shape could leave behind for the next.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Leave the interior untouched (outline-only shapes).
    None,
    Solid(Color),
}

impl Paint {
    /// Returns the fill color, or `None` if nothing would be painted.
    #[inline]
    pub fn visible_color(&self) -> Option<Color> {
        match self {
            Paint::None => None,
            Paint::Solid(c) if c.is_transparent() => None,
            Paint::Solid(c) => Some(*c),
        }
    }
}
