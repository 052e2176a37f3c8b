//! Design-unit scaling and integer layout boxes.
//!
//! All scene geometry is authored against a canvas [`REFERENCE_WIDTH`] pixels
//! wide. [`scale`] maps a design value to the target canvas with integer
//! floor division, so every device gets the same proportions and identical
//! inputs always land on identical pixels.

use woodsnap_engine::coords::{Rect, Vec2};

/// Canvas width the design units are authored for.
pub const REFERENCE_WIDTH: u32 = 1320;

/// `floor(value * width / reference)`.
///
/// A zero `reference` is treated as 1.
#[inline]
pub fn scale(value: i32, width: u32, reference: u32) -> i32 {
    let num = value as i64 * width as i64;
    num.div_euclid(reference.max(1) as i64) as i32
}

/// [`scale`] bound to one canvas width and the default reference.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Scale {
    width: u32,
}

impl Scale {
    #[inline]
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Design units to whole pixels.
    #[inline]
    pub fn px(self, value: i32) -> i32 {
        scale(value, self.width, REFERENCE_WIDTH)
    }

    /// Design units to whole pixels, as `f32` for draw commands.
    #[inline]
    pub fn pxf(self, value: i32) -> f32 {
        self.px(value) as f32
    }
}

/// Integer box given by its top-left and bottom-right corners.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box at `(x, y)` of size `w × h`.
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.y1 - self.y0
    }

    #[inline]
    pub const fn inset(self, d: i32) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }

    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect::from_corners(self.x0 as f32, self.y0 as f32, self.x1 as f32, self.y1 as f32)
    }
}

impl From<Bounds> for Rect {
    #[inline]
    fn from(b: Bounds) -> Rect {
        b.to_rect()
    }
}

/// Integer point as a draw-command position.
#[inline]
pub fn pt(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn reference_width_is_identity() {
        for v in [0, 1, 8, 40, 88, 120, 1000] {
            assert_eq!(scale(v, REFERENCE_WIDTH, REFERENCE_WIDTH), v);
        }
    }

    #[test]
    fn floors_fractional_results() {
        // 88 * 1242 / 1320 = 82.8
        assert_eq!(scale(88, 1242, 1320), 82);
        // 40 * 1290 / 1320 = 39.09
        assert_eq!(scale(40, 1290, 1320), 39);
    }

    #[test]
    fn linear_in_width_within_rounding() {
        for v in [1, 7, 20, 88, 130, 999] {
            for w in [320, 661, 1242, 1284, 1290, 1320] {
                let single = scale(v, w, REFERENCE_WIDTH);
                let double = scale(v, 2 * w, REFERENCE_WIDTH);
                assert!((double - 2 * single).abs() <= 1, "v={v} w={w}: {double} vs 2*{single}");
            }
        }
    }

    #[test]
    fn monotonic_in_width() {
        let mut last = scale(88, 0, REFERENCE_WIDTH);
        for w in 1..3000 {
            let next = scale(88, w, REFERENCE_WIDTH);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn zero_reference_does_not_panic() {
        assert_eq!(scale(3, 5, 0), 15);
    }

    #[test]
    fn scale_value_matches_free_function() {
        let s = Scale::new(1284);
        assert_eq!(s.px(120), scale(120, 1284, REFERENCE_WIDTH));
        assert_eq!(s.pxf(16), s.px(16) as f32);
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounds_geometry() {
        let b = Bounds::from_xywh(10, 20, 100, 50);
        assert_eq!((b.width(), b.height()), (100, 50));
        assert_eq!(b.inset(5), Bounds::new(15, 25, 105, 65));
        assert_eq!(b.to_rect(), Rect::new(10.0, 20.0, 100.0, 50.0));
    }
}
