use std::fmt;
use std::path::Path;

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`] and [`FontSystem::load_font_file`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is passed by reference to
/// the text rasterizer, which lays glyphs out with the same `fontdue` layout
/// settings that [`measure_text`](Self::measure_text) uses.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Reads and parses the font file at `path`.
    pub fn load_font_file(&mut self, path: &Path) -> Result<FontId, FontLoadError> {
        let bytes = std::fs::read(path)
            .map_err(|e| FontLoadError(format!("{}: {e}", path.display())))?;
        self.load_font(&bytes)
            .map_err(|e| FontLoadError(format!("{}: {}", path.display(), e.0)))
    }

    /// Number of fonts loaded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Returns `(width, height)` in pixels. Width is the pen advance after the
    /// last glyph, so centering on it matches where the rasterizer places the
    /// glyphs. Unknown fonts and empty strings measure as zero width and one
    /// nominal line (`size * 1.2`) high.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Pen position after each glyph (g.x - xmin + advance) rather than the
        // bitmap right edge, so trailing side bearings count toward the width.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"definitely not a font").is_err());
        assert!(fonts.is_empty());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_font_file(Path::new("/nonexistent/woodsnap/font.ttf"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/woodsnap/font.ttf"));
    }

    #[test]
    fn unknown_font_measures_as_empty_line() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("Red Oak", FontId(3), 20.0);
        assert_eq!(size, Vec2::new(0.0, 24.0));
    }
}
