pub mod circle;
pub mod line;
pub mod rect;
pub mod rounded_rect;
pub mod text;

use crate::paint::Color;

/// Stroke drawn along the inner edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
