//! The regular and rounded fonts used by scenes and captions.

use std::path::PathBuf;

use woodsnap_engine::text::{FontId, FontSystem};

use crate::error::GenerateError;

/// Which of the two faces a piece of text uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Face {
    /// Body text inside the mock screens.
    Regular,
    /// Marketing captions.
    Rounded,
}

/// Candidate font files, tried in order; the first that parses wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    pub regular: Vec<PathBuf>,
    pub rounded: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        let paths = |list: &[&str]| list.iter().map(PathBuf::from).collect();
        Self {
            regular: paths(&[
                "/System/Library/Fonts/SFNS.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/noto/NotoSans-Regular.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
            ]),
            rounded: paths(&["/System/Library/Fonts/SFNSRounded.ttf"]),
        }
    }
}

/// Loaded fonts plus the handles of the two faces.
pub struct Typeface {
    fonts: FontSystem,
    regular: Option<FontId>,
    rounded: Option<FontId>,
}

impl Typeface {
    /// Loads both faces.
    ///
    /// The regular face is required. When no rounded candidate loads, captions
    /// fall back to the regular face.
    pub fn load(config: &FontConfig) -> Result<Self, GenerateError> {
        let mut fonts = FontSystem::new();

        let regular = load_first(&mut fonts, &config.regular).ok_or_else(|| {
            GenerateError::FontUnavailable { role: "regular", tried: describe(&config.regular) }
        })?;

        let rounded = match load_first(&mut fonts, &config.rounded) {
            Some(id) => id,
            None => {
                log::warn!(
                    "rounded font unavailable (tried: {}); captions use the regular face",
                    describe(&config.rounded)
                );
                regular
            }
        };

        Ok(Self { fonts, regular: Some(regular), rounded: Some(rounded) })
    }

    /// A typeface with no faces loaded.
    ///
    /// Text measures as zero width and is not drawn; every other part of a
    /// screenshot renders normally.
    pub fn bare() -> Self {
        Self { fonts: FontSystem::new(), regular: None, rounded: None }
    }

    #[inline]
    pub fn face(&self, face: Face) -> Option<FontId> {
        match face {
            Face::Regular => self.regular,
            Face::Rounded => self.rounded,
        }
    }

    /// True when text will actually be drawn.
    #[inline]
    pub fn has_text(&self) -> bool {
        self.regular.is_some()
    }

    #[inline]
    pub fn font_system(&self) -> &FontSystem {
        &self.fonts
    }

    /// Advance width of `text` in `face` at `size` pixels. Zero without fonts.
    pub fn text_width(&self, face: Face, text: &str, size: f32) -> f32 {
        match self.face(face) {
            Some(id) => self.fonts.measure_text(text, id, size).x,
            None => 0.0,
        }
    }
}

fn load_first(fonts: &mut FontSystem, candidates: &[PathBuf]) -> Option<FontId> {
    candidates.iter().find_map(|path| match fonts.load_font_file(path) {
        Ok(id) => {
            log::debug!("loaded font {}", path.display());
            Some(id)
        }
        Err(e) => {
            log::debug!("skipping font candidate: {e}");
            None
        }
    })
}

fn describe(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidates".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing() -> Vec<PathBuf> {
        vec![PathBuf::from("/nonexistent/woodsnap/Missing.ttf")]
    }

    #[test]
    fn missing_regular_font_is_fatal() {
        let config = FontConfig { regular: missing(), rounded: missing() };
        let err = Typeface::load(&config).err().unwrap();
        match err {
            GenerateError::FontUnavailable { role, tried } => {
                assert_eq!(role, "regular");
                assert!(tried.contains("Missing.ttf"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rounded_falls_back_to_regular() {
        let defaults = FontConfig::default();
        let config = FontConfig { regular: defaults.regular, rounded: missing() };
        let Ok(typeface) = Typeface::load(&config) else {
            eprintln!("no system font installed; skipping");
            return;
        };
        assert_eq!(typeface.face(Face::Rounded), typeface.face(Face::Regular));
        assert_eq!(typeface.font_system().len(), 1);
    }

    #[test]
    fn bare_typeface_measures_nothing() {
        let typeface = Typeface::bare();
        assert!(!typeface.has_text());
        assert_eq!(typeface.face(Face::Rounded), None);
        assert_eq!(typeface.text_width(Face::Regular, "Walnut", 30.0), 0.0);
    }
}
