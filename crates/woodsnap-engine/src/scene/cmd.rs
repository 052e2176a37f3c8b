use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded drawing operation.
///
/// Each variant has a payload and `DrawList` push helpers in
/// `scene::shapes`, and a rasterizer in `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}
