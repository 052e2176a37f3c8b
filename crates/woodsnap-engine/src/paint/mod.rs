//! Paint model shared between scene code and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, vertical gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::LinearGradient;

use crate::coords::Vec2;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Returns true when nothing would be drawn with this paint.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a <= 0.0,
            Paint::LinearGradient(g) => g.is_invisible(),
        }
    }

    /// Color of this paint at pixel-space point `p`.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.sample(p),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
