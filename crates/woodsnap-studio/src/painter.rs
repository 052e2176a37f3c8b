use woodsnap_engine::coords::{Rect, Vec2};
use woodsnap_engine::paint::{Color, Paint};
use woodsnap_engine::scene::{Border, DrawList, ZIndex};

use crate::typeface::{Face, Typeface};

/// Drawing surface handed to chrome and scene code.
///
/// Wraps the engine's `DrawList` with a small high-level API. Every call is
/// placed above the previous one, so paint order is call order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    typeface: &'a Typeface,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, typeface: &'a Typeface) -> Self {
        Self { draw_list, typeface, z: 0 }
    }

    #[inline]
    pub fn typeface(&self) -> &Typeface {
        self.typeface
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Advance width of `text` at `size` pixels.
    #[inline]
    pub fn text_width(&self, face: Face, text: &str, size: f32) -> f32 {
        self.typeface.text_width(face, text, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Axis-aligned rectangle filled with `paint`.
    pub fn fill_rect(&mut self, rect: impl Into<Rect>, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect.into(), paint.into());
    }

    /// Solid rounded rectangle with a uniform corner radius.
    pub fn fill_rounded_rect(&mut self, rect: impl Into<Rect>, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rounded_rect(z, rect.into(), radius, color);
    }

    /// Rounded rectangle outline of `width` pixels, drawn inside `rect`.
    pub fn stroke_rounded_rect(&mut self, rect: impl Into<Rect>, radius: f32, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list
            .push_outlined_rounded_rect(z, rect.into(), radius, Border::new(width, color));
    }

    /// Solid disc.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_circle(z, center, radius, color);
    }

    /// Circle outline of `width` pixels, drawn inside `radius`.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_outlined_circle(z, center, radius, Border::new(width, color));
    }

    /// Straight stroke from `from` to `to`.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color);
    }

    /// Single-line text with its top-left at `origin`.
    ///
    /// Dropped (with a debug log) when the typeface has no font for `face`.
    pub fn text(&mut self, face: Face, text: &str, size: f32, origin: Vec2, color: Color) {
        let Some(font) = self.typeface.face(face) else {
            log::debug!("no {face:?} font loaded; dropping text {text:?}");
            return;
        };
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, origin, color);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: impl Into<Rect>) {
        self.draw_list.push_clip(rect.into());
    }

    /// End the most recent clip region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
