//! Side-by-side comparison of Red Oak and White Oak.

use woodsnap_engine::paint::Color;

use crate::grain::wood_grain;
use crate::layout::{Bounds, Scale, pt};
use crate::painter::Painter;
use crate::style::{INK, MUTED, PAPER, rgb};
use crate::typeface::Face;

use super::{portion, progress_bar, screen_fill};

const METRICS: [&str; 4] = ["Hardness", "Density", "Price", "Durability"];

struct Sample {
    name: &'static str,
    wood: [u8; 3],
    scores: [f64; 4],
}

const SAMPLES: [Sample; 2] = [
    Sample { name: "Red Oak", wood: [178, 120, 60], scores: [0.73, 0.60, 0.45, 0.65] },
    Sample { name: "White Oak", wood: [195, 160, 100], scores: [0.81, 0.65, 0.60, 0.80] },
];

/// Left edges and shared width of the two columns.
pub fn columns(screen: Bounds, s: Scale) -> ([i32; 2], i32) {
    let half = (screen.width() - s.px(30)) / 2;
    ([screen.x0 + s.px(10), screen.x0 + s.px(20) + half], half)
}

pub fn draw(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    screen_fill(p, screen, s, PAPER);

    let (lefts, half) = columns(screen, s);
    let sample_h = portion(screen.height(), 0.28);
    let sample_top = screen.y0 + s.px(10);
    let [mr, mg, mb] = MUTED;
    let [ir, ig, ib] = INK;

    for (side, (sample, x)) in SAMPLES.iter().zip(lefts).enumerate() {
        let swatch = Bounds::from_xywh(x, sample_top, half, sample_h);
        wood_grain(p, swatch, sample.wood, side as u64 * 33);
        p.stroke_rounded_rect(swatch, s.pxf(10), 2.0, rgb(200, 190, 175));

        let name_y = screen.y0 + sample_h + s.px(18);
        p.text(Face::Regular, sample.name, s.pxf(22), pt(x + s.px(10), name_y), rgb(ir, ig, ib));

        let bar_fill = if side == 0 { accent } else { rgb(160, 120, 60) };
        let bar_w = half - s.px(20);
        for (i, (label, score)) in METRICS.iter().zip(sample.scores).enumerate() {
            let y = screen.y0 + sample_h + s.px(55) + i as i32 * s.px(45);
            p.text(Face::Regular, label, s.pxf(14), pt(x + s.px(10), y), rgb(mr, mg, mb));
            let bar_y = y + s.px(20);
            let track = Bounds::from_xywh(x + s.px(10), bar_y, bar_w, s.px(10));
            progress_bar(p, track, s.pxf(5), score, bar_fill);
        }
    }

    let (vx, vy) = (screen.x0 + screen.width() / 2, screen.y0 + portion(screen.height(), 0.15));
    p.fill_circle(pt(vx, vy), s.pxf(18), accent);
    p.text(Face::Regular, "VS", s.pxf(16), pt(vx - s.px(10), vy - s.px(12)), rgb(255, 255, 255));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_do_not_overlap() {
        let screen = Bounds::new(259, 1097, 1061, 2515);
        let ([left, right], half) = columns(screen, Scale::new(1320));
        assert_eq!(half, 386);
        assert_eq!(left, 269);
        assert!(left + half < right);
        assert!(right + half <= screen.x1);
    }
}
