use crate::coords::Vec2;

use super::Color;

/// Two-color gradient along the y axis.
///
/// Rows at or above `top` take `from`, rows at or below `bottom` take `to`;
/// in between the colors are interpolated linearly in premultiplied space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub top: f32,
    pub bottom: f32,
    pub from: Color,
    pub to: Color,
}

impl LinearGradient {
    #[inline]
    pub fn vertical(top: f32, bottom: f32, from: Color, to: Color) -> Self {
        Self { top, bottom, from, to }
    }

    /// Color at pixel-space point `p`. Only `p.y` matters.
    pub fn sample(&self, p: Vec2) -> Color {
        let span = self.bottom - self.top;
        if !(span.abs() > f32::EPSILON) || !p.y.is_finite() {
            return self.from;
        }
        let t = ((p.y - self.top) / span).clamp(0.0, 1.0);
        self.from.lerp(self.to, t)
    }

    /// True when neither end color has any coverage.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.from.a <= 0.0 && self.to.a <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_to_white() -> LinearGradient {
        LinearGradient::vertical(10.0, 20.0, Color::black(), Color::white())
    }

    #[test]
    fn sample_endpoints_and_middle() {
        let g = black_to_white();
        assert_eq!(g.sample(Vec2::new(0.0, 10.0)), Color::black());
        assert_eq!(g.sample(Vec2::new(0.0, 20.0)), Color::white());
        assert!((g.sample(Vec2::new(99.0, 15.0)).r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn pads_outside_range() {
        let g = black_to_white();
        assert_eq!(g.sample(Vec2::new(0.0, -100.0)), Color::black());
        assert_eq!(g.sample(Vec2::new(0.0, 500.0)), Color::white());
    }

    #[test]
    fn degenerate_gradient_uses_first_color() {
        let g = LinearGradient::vertical(5.0, 5.0, Color::black(), Color::white());
        assert_eq!(g.sample(Vec2::new(0.0, 5.0)), Color::black());
    }

    #[test]
    fn invisible_only_when_both_ends_transparent() {
        let clear = Color::transparent();
        assert!(LinearGradient::vertical(0.0, 1.0, clear, clear).is_invisible());
        assert!(!LinearGradient::vertical(0.0, 1.0, clear, Color::from_srgb_u8(0, 0, 0, 30)).is_invisible());
    }
}
