//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::Border;
pub use shapes::circle::CircleCmd;
pub use shapes::line::LineCmd;
pub use shapes::rect::RectCmd;
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::text::TextCmd;
