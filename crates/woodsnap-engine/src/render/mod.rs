//! CPU rendering subsystem.
//!
//! [`Renderer`] consumes a `scene` draw stream and rasterizes it into a
//! [`Canvas`]. Every shape is evaluated per pixel against a signed distance
//! (or exact box overlap for axis-aligned rects) sampled at pixel centers,
//! which gives one pixel of anti-aliasing on curved edges and crisp edges on
//! integer-aligned rectangles.
//!
//! Convention:
//! - geometry is in canvas pixels (top-left origin, +Y down)
//! - colors are premultiplied and blended source-over in sRGB encoding

mod canvas;
pub mod shapes;

pub use canvas::Canvas;

use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use shapes::text::TextRenderer;

/// Rasterizes draw lists into canvases.
///
/// Holds the glyph cache, so reuse one renderer across canvases that share
/// a [`FontSystem`].
#[derive(Default)]
pub struct Renderer {
    text: TextRenderer,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every item of `draw_list` into `canvas`, back to front.
    pub fn render(&mut self, canvas: &mut Canvas, draw_list: &mut DrawList, fonts: &FontSystem) {
        let mut drawn = 0usize;
        for item in draw_list.iter_in_paint_order() {
            let clip = item.clip_rect;
            match &item.cmd {
                DrawCmd::Rect(cmd) => shapes::rect::fill(canvas, cmd, clip),
                DrawCmd::RoundedRect(cmd) => shapes::rounded_rect::fill(canvas, cmd, clip),
                DrawCmd::Circle(cmd) => shapes::circle::fill(canvas, cmd, clip),
                DrawCmd::Line(cmd) => shapes::line::stroke(canvas, cmd, clip),
                DrawCmd::Text(cmd) => self.text.draw(canvas, cmd, clip, fonts),
            }
            drawn += 1;
        }
        log::trace!(
            "rendered {drawn} draw items into {}x{} canvas",
            canvas.width(),
            canvas.height()
        );
    }
}
