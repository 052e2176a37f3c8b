/// Premultiplied RGBA color with channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Channels are stored in the same sRGB encoding as the 8-bit values they are
/// built from. The rasterizer blends in that encoding, so a 50% black over a
/// `(200, 200, 200)` pixel lands on `(100, 100, 100)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Opaque color from an `[r, g, b]` byte triple.
    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::from_srgb_u8(rgb[0], rgb[1], rgb[2], 255)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Scales all channels (including alpha) by `k`, e.g. for partial pixel coverage.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        let k = k.clamp(0.0, 1.0);
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Linear interpolation between two premultiplied colors.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_straight_clamps_and_premultiplies() {
        let c = Color::from_straight(2.0, 0.5, -1.0, 0.5);
        assert_eq!(c, Color { r: 0.5, g: 0.25, b: 0.0, a: 0.5 });
    }

    #[test]
    fn from_srgb_u8_premultiplies() {
        let c = Color::from_srgb_u8(255, 0, 0, 51);
        assert!((c.a - 0.2).abs() < 1e-6);
        assert!((c.r - 0.2).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn scaled_keeps_premultiplication() {
        let c = Color::from_rgb([200, 100, 50]).scaled(0.5);
        assert!((c.a - 0.5).abs() < 1e-6);
        assert!((c.r - 200.0 / 255.0 * 0.5).abs() < 1e-6);
        assert!(c.r <= c.a && c.g <= c.a && c.b <= c.a);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::black();
        let b = Color::white();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!((a.lerp(b, 0.5).r - 0.5).abs() < 1e-6);
    }
}
