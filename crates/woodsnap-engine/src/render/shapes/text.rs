use std::collections::HashMap;

use fontdue::Metrics;
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::coords::Rect;
use crate::render::Canvas;
use crate::scene::TextCmd;
use crate::text::FontSystem;

use super::common::pixel_bounds;

// ── cached glyph ──────────────────────────────────────────────────────────

struct CachedGlyph {
    metrics: Metrics,
    coverage: Vec<u8>,
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Rasterizer for `DrawCmd::Text`.
///
/// Glyphs are rasterized on first use via fontdue and cached for the
/// renderer's lifetime. The cache key is `fontdue::layout::GlyphRasterConfig`,
/// which encodes font identity, glyph index and pixel size, so the same glyph
/// at the same size across canvases is rasterized only once.
pub struct TextRenderer {
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    // reusable fontdue layout
    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    /// Draws one text command. Unknown fonts are logged and skipped.
    pub fn draw(&mut self, canvas: &mut Canvas, cmd: &TextCmd, clip: Option<Rect>, fonts: &FontSystem) {
        if cmd.text.is_empty() || cmd.color.a <= 0.0 {
            return;
        }
        let Some(font) = fonts.get(cmd.font) else {
            log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
            return;
        };

        self.layout.reset(&LayoutSettings {
            x: cmd.origin.x,
            y: cmd.origin.y,
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

        // Snapshot glyph positions so the borrow on `self.layout` ends before
        // the cache is mutated.
        let glyph_snap: Vec<(GlyphRasterConfig, f32, f32)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y))
            .collect();

        for (key, gx, gy) in glyph_snap {
            let glyph = self.glyph_cache.entry(key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(key);
                CachedGlyph { metrics, coverage }
            });
            let (w, h) = (glyph.metrics.width, glyph.metrics.height);
            if w == 0 || h == 0 {
                continue;
            }

            let x0 = gx.round();
            let y0 = gy.round();
            let dst = Rect::new(x0, y0, w as f32, h as f32);
            let Some(bounds) = pixel_bounds(dst, clip, canvas) else {
                continue;
            };

            for (x, y) in bounds.pixels() {
                // Bounds lie inside `dst`, so these offsets index the bitmap.
                let col = (x as f32 - x0) as usize;
                let row = (y as f32 - y0) as usize;
                let a = glyph.coverage[row * w + col];
                if a > 0 {
                    canvas.blend(x, y, cmd.color.scaled(a as f32 / 255.0));
                }
            }
        }
    }
}
