use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// One line of text, laid out left to right from `origin`.
///
/// `origin` is the top-left of the line box, matching the layout used by
/// `FontSystem::measure_text`, so a measured width can be used to align it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in pixels.
    pub size: f32,
    pub origin: Vec2,
    pub color: Color,
}

impl TextCmd {
    #[inline]
    pub fn new(text: impl Into<String>, font: FontId, size: f32, origin: Vec2, color: Color) -> Self {
        Self { text: text.into(), font, size, origin, color }
    }
}

impl DrawList {
    /// Records a single line of text.
    #[inline]
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        origin: Vec2,
        color: Color,
    ) {
        self.push(z, DrawCmd::Text(TextCmd::new(text, font, size, origin, color)));
    }
}
