//! Shared helpers used by all shape rasterizers.

use crate::coords::{Rect, Vec2};
use crate::render::Canvas;

// ── pixel bounds ──────────────────────────────────────────────────────────

/// Half-open pixel span `[x0, x1) × [y0, y1)` already clamped to the canvas
/// and the active clip rect.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct PixelBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBounds {
    /// Iterates `(x, y)` in row-major order.
    pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (self.y0..self.y1).flat_map(move |y| (self.x0..self.x1).map(move |x| (x, y)))
    }
}

/// Pixels that may be touched by a shape with bounding box `shape`.
///
/// Returns `None` when nothing is visible (empty shape, fully clipped, or off
/// canvas). Clip edges are rounded to whole pixels; the clip is a scissor, not
/// an anti-aliased mask.
pub(super) fn pixel_bounds(shape: Rect, clip: Option<Rect>, canvas: &Canvas) -> Option<PixelBounds> {
    let shape = shape.normalized();
    if !shape.is_finite() {
        return None;
    }

    let mut x0 = shape.origin.x.floor();
    let mut y0 = shape.origin.y.floor();
    let mut x1 = (shape.origin.x + shape.size.x).ceil();
    let mut y1 = (shape.origin.y + shape.size.y).ceil();

    if let Some(c) = clip {
        let c = c.normalized();
        x0 = x0.max(c.origin.x.round());
        y0 = y0.max(c.origin.y.round());
        x1 = x1.min((c.origin.x + c.size.x).round());
        y1 = y1.min((c.origin.y + c.size.y).round());
    }

    x0 = x0.max(0.0);
    y0 = y0.max(0.0);
    x1 = x1.min(canvas.width() as f32);
    y1 = y1.min(canvas.height() as f32);

    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(PixelBounds { x0: x0 as u32, y0: y0 as u32, x1: x1 as u32, y1: y1 as u32 })
}

// ── sampling ──────────────────────────────────────────────────────────────

/// Center of pixel `(x, y)`.
#[inline]
pub(super) fn pixel_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Coverage for a signed distance sampled at a pixel center (negative inside).
///
/// A one-pixel linear ramp centered on the edge.
#[inline]
pub(super) fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

/// Signed distance from `p` to an axis-aligned box centered at the origin
/// with half extents `half`.
#[inline]
pub(super) fn sd_box(p: Vec2, half: Vec2) -> f32 {
    let qx = p.x.abs() - half.x;
    let qy = p.y.abs() - half.y;
    let outside = Vec2::new(qx.max(0.0), qy.max(0.0)).length();
    outside + qx.max(qy).min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_clamp_to_canvas() {
        let canvas = Canvas::new(10, 10, [0, 0, 0]);
        let b = pixel_bounds(Rect::new(-5.0, 2.5, 100.0, 3.0), None, &canvas).unwrap();
        assert_eq!(b, PixelBounds { x0: 0, y0: 2, x1: 10, y1: 6 });
    }

    #[test]
    fn bounds_respect_clip() {
        let canvas = Canvas::new(10, 10, [0, 0, 0]);
        let clip = Some(Rect::new(4.0, 4.0, 2.0, 2.0));
        let b = pixel_bounds(Rect::new(0.0, 0.0, 10.0, 10.0), clip, &canvas).unwrap();
        assert_eq!(b.pixels().count(), 4);
    }

    #[test]
    fn bounds_none_when_off_canvas() {
        let canvas = Canvas::new(10, 10, [0, 0, 0]);
        assert!(pixel_bounds(Rect::new(20.0, 0.0, 5.0, 5.0), None, &canvas).is_none());
    }

    #[test]
    fn sd_box_signs() {
        let half = Vec2::new(2.0, 1.0);
        assert_eq!(sd_box(Vec2::new(0.0, 0.0), half), -1.0);
        assert_eq!(sd_box(Vec2::new(5.0, 0.0), half), 3.0);
        assert_eq!(sd_box(Vec2::new(2.0, 0.0), half), 0.0);
    }

    #[test]
    fn coverage_ramp() {
        assert_eq!(coverage(-1.0), 1.0);
        assert_eq!(coverage(0.0), 0.5);
        assert_eq!(coverage(1.0), 0.0);
    }
}
