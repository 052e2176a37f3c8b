/// Per-corner radii for a rounded rectangle (pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by the rasterizer, and every radius is
/// clamped to half the shorter side of the rectangle it rounds.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Returns radii clamped to `[0, limit]`.
    #[inline]
    pub fn clamped(self, limit: f32) -> Self {
        let limit = limit.max(0.0);
        let c = |r: f32| r.clamp(0.0, limit);
        Self::new(c(self.top_left), c(self.top_right), c(self.bottom_right), c(self.bottom_left))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0 && self.top_right <= 0.0 && self.bottom_right <= 0.0 && self.bottom_left <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_limits_each_corner() {
        let r = CornerRadii::new(-2.0, 5.0, 50.0, 10.0).clamped(10.0);
        assert_eq!(r, CornerRadii::new(0.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn zero_is_zero() {
        assert!(CornerRadii::zero().is_zero());
        assert!(!CornerRadii::all(1.0).is_zero());
    }
}
