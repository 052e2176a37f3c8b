//! Coordinate and geometry types shared by the draw stream and the rasterizer.
//!
//! Canonical space:
//! - Device pixels of the target canvas
//! - Origin top-left
//! - +X right, +Y down
//!
//! Pixel `(x, y)` covers the square `[x, x+1) × [y, y+1)`; coverage is sampled
//! at pixel centers.

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
