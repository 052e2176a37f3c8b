use std::path::Path;

use image::{ImageEncoder, ImageFormat, ImageResult, Rgb, RgbImage};

use crate::paint::Color;

/// Opaque RGB raster target.
///
/// The canvas has no alpha channel: every blend composites a premultiplied
/// source over an opaque destination, so the result stays opaque.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Creates a `width × height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        Self { image: RgbImage::from_pixel(width, height, Rgb(background)) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Composites premultiplied `src` over the pixel at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, src: Color) {
        if src.a <= 0.0 {
            return;
        }
        let Some(px) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        let inv = 1.0 - src.a.min(1.0);
        let over = |s: f32, d: u8| to_u8(s + (d as f32 / 255.0) * inv);
        px.0 = [over(src.r, px.0[0]), over(src.g, px.0[1]), over(src.b, px.0[2])];
    }

    /// Raw `RGBRGB…` bytes, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Encodes the canvas as an 8-bit RGB PNG in memory.
    pub fn encode_png(&self) -> ImageResult<Vec<u8>> {
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(out)
    }

    /// Writes the canvas to `path` as PNG. The parent directory must exist.
    pub fn save_png(&self, path: &Path) -> ImageResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_background() {
        let c = Canvas::new(4, 3, [42, 32, 24]);
        assert_eq!(c.width(), 4);
        assert_eq!(c.height(), 3);
        assert!(c.as_raw().chunks(3).all(|p| p == [42, 32, 24]));
    }

    #[test]
    fn opaque_blend_replaces() {
        let mut c = Canvas::new(2, 2, [0, 0, 0]);
        c.blend(1, 1, Color::from_rgb([10, 200, 30]));
        assert_eq!(c.pixel(1, 1), Some([10, 200, 30]));
        assert_eq!(c.pixel(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn half_black_over_grey_halves() {
        let mut c = Canvas::new(1, 1, [200, 200, 200]);
        c.blend(0, 0, Color::from_srgb_u8(0, 0, 0, 128));
        let [r, _, _] = c.pixel(0, 0).unwrap();
        assert!((99..=100).contains(&r), "got {r}");
    }

    #[test]
    fn out_of_bounds_blend_is_ignored() {
        let mut c = Canvas::new(2, 2, [1, 2, 3]);
        c.blend(5, 0, Color::white());
        assert!(c.as_raw().chunks(3).all(|p| p == [1, 2, 3]));
        assert_eq!(c.pixel(5, 0), None);
    }

    #[test]
    fn encode_png_has_signature() {
        let bytes = Canvas::new(8, 8, [255, 255, 255]).encode_png().unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
