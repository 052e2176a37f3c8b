//! Per-shape rasterizers, one module per `scene::shapes` command.

mod common;

pub mod circle;
pub mod line;
pub mod rect;
pub mod rounded_rect;
pub mod text;
