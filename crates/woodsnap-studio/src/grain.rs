//! Procedural wood-grain texture.
//!
//! A texture is a stack of two-pixel horizontal bands every three pixels, each
//! jittered around the base color, plus up to two darker knots. Everything is
//! driven by [`GrainRng`], so the same seed, region and base color always
//! produce the same marks.

use crate::layout::{Bounds, pt};
use crate::painter::Painter;
use crate::style::rgb;

/// Vertical distance between band starts.
const BAND_STEP: i32 = 3;
/// Band thickness.
const BAND_HEIGHT: i32 = 2;
/// Per-channel color jitter, inclusive.
const JITTER: i32 = 15;
/// Knot centers keep this distance from the region edges.
const KNOT_MARGIN: i32 = 20;
const KNOT_MIN_RADIUS: i32 = 8;
const KNOT_MAX_RADIUS: i32 = 25;
const MAX_KNOTS: i32 = 2;
/// How much darker than the base a knot is, per channel.
const KNOT_DARKEN: u8 = 30;

// ── rng ───────────────────────────────────────────────────────────────────

/// SplitMix64 generator.
///
/// Small, fast and fully specified, so fixtures rendered today stay valid on
/// any platform and toolchain.
#[derive(Debug, Clone)]
pub struct GrainRng {
    state: u64,
}

impl GrainRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `[lo, hi]`.
    ///
    /// An empty range (`hi < lo`) yields `lo` and still consumes one draw.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            self.next_u64();
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1) as u64;
        // Reject the top partial bucket so every value is equally likely.
        let limit = u64::MAX - (u64::MAX % span);
        loop {
            let v = self.next_u64();
            if v < limit {
                return (lo as i64 + (v % span) as i64) as i32;
            }
        }
    }
}

// ── texture ───────────────────────────────────────────────────────────────

/// One horizontal band starting at row `y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Band {
    pub y: i32,
    pub height: i32,
    pub color: [u8; 3],
}

/// A filled knot circle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Knot {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
    pub color: [u8; 3],
}

/// The marks of one wood-grain texture.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WoodGrain {
    pub region: Bounds,
    pub bands: Vec<Band>,
    pub knots: Vec<Knot>,
}

impl WoodGrain {
    /// Generates the texture for `region` around `base`.
    pub fn generate(region: Bounds, base: [u8; 3], seed: u64) -> Self {
        let mut rng = GrainRng::new(seed);
        let (w, h) = (region.width(), region.height());

        let mut bands = Vec::with_capacity((h.max(0) / BAND_STEP + 1) as usize);
        let mut i = 0;
        while i < h {
            let v = rng.range_inclusive(-JITTER, JITTER);
            bands.push(Band {
                y: region.y0 + i,
                height: BAND_HEIGHT.min(h - i),
                color: base.map(|c| jitter(c, v)),
            });
            i += BAND_STEP;
        }

        let knot_count = rng.range_inclusive(0, MAX_KNOTS);
        let knot_color = base.map(|c| c.saturating_sub(KNOT_DARKEN));
        let knots = (0..knot_count)
            .map(|_| {
                let cx = rng.range_inclusive(region.x0 + KNOT_MARGIN, region.x0 + w - KNOT_MARGIN);
                let cy = rng.range_inclusive(region.y0 + KNOT_MARGIN, region.y0 + h - KNOT_MARGIN);
                let radius = rng.range_inclusive(KNOT_MIN_RADIUS, KNOT_MAX_RADIUS);
                Knot { cx, cy, radius, color: knot_color }
            })
            .collect();

        Self { region, bands, knots }
    }

    /// Records the texture: bands first, knots on top.
    pub fn paint(&self, painter: &mut Painter<'_>) {
        for band in &self.bands {
            let [r, g, b] = band.color;
            let rect = Bounds::new(self.region.x0, band.y, self.region.x1, band.y + band.height);
            painter.fill_rect(rect, rgb(r, g, b));
        }
        for knot in &self.knots {
            let [r, g, b] = knot.color;
            painter.fill_circle(pt(knot.cx, knot.cy), knot.radius as f32, rgb(r, g, b));
        }
    }
}

/// Generates and paints a wood-grain texture in one step.
pub fn wood_grain(painter: &mut Painter<'_>, region: Bounds, base: [u8; 3], seed: u64) {
    WoodGrain::generate(region, base, seed).paint(painter);
}

#[inline]
fn jitter(c: u8, v: i32) -> u8 {
    (c as i32 + v).clamp(0, 255) as u8
}
