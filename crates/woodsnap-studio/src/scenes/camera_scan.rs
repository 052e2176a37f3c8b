//! Live camera view: a wood sample under a scan line, framed by focus
//! brackets, with the identification result sheet below.

use woodsnap_engine::paint::Color;

use crate::grain::wood_grain;
use crate::layout::{Bounds, Scale, pt};
use crate::painter::Painter;
use crate::style::{ESPRESSO, VIEWFINDER, WHITE, rgb, rgba};
use crate::typeface::Face;

use super::{portion, progress_bar, screen_fill};

const SAMPLE_WOOD: [u8; 3] = [165, 110, 55];
const SAMPLE_SEED: u64 = 42;
const CONFIDENCE: f64 = 0.94;

/// The camera preview showing the wood sample.
pub fn preview(screen: Bounds, s: Scale) -> Bounds {
    Bounds::from_xywh(
        screen.x0 + s.px(10),
        screen.y0 + s.px(20),
        screen.width() - s.px(20),
        portion(screen.height(), 0.55),
    )
}

pub fn draw(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    screen_fill(p, screen, s, VIEWFINDER);

    let view = preview(screen, s);
    wood_grain(p, view, SAMPLE_WOOD, SAMPLE_SEED);

    let mid = view.y0 + view.height() / 2;
    p.line(
        pt(screen.x0 + s.px(20), mid),
        pt(screen.x1 - s.px(20), mid),
        s.pxf(4),
        rgb(100, 200, 255),
    );

    focus_brackets(p, screen, view, s);
    result_sheet(p, screen, view, s, accent);
}

fn focus_brackets(p: &mut Painter<'_>, screen: Bounds, view: Bounds, s: Scale) {
    let arm = s.px(40);
    let width = s.pxf(4);
    let color = rgba(255, 255, 255, 200);

    let left = screen.x0 + s.px(30);
    let right = screen.x1 - s.px(30);
    let top = view.y0 + s.px(10);
    let bottom = view.y1 - s.px(10);

    // Corner point and the direction both arms extend into the preview.
    for (x, y, dx, dy) in [(left, top, 1, 1), (right, top, -1, 1), (left, bottom, 1, -1), (right, bottom, -1, -1)] {
        p.line(pt(x, y), pt(x + dx * arm, y), width, color);
        p.line(pt(x, y), pt(x, y + dy * arm), width, color);
    }
}

fn result_sheet(p: &mut Painter<'_>, screen: Bounds, view: Bounds, s: Scale, accent: Color) {
    let top = view.y1 + s.px(20);
    let sheet = Bounds::new(screen.x0 + s.px(15), top, screen.x1 - s.px(15), screen.y1 - s.px(15));
    let [r, g, b] = WHITE;
    p.fill_rounded_rect(sheet, s.pxf(20), rgb(r, g, b));

    let x = screen.x0 + s.px(35);
    let [r, g, b] = ESPRESSO;
    p.text(Face::Regular, "Red Oak", s.pxf(32), pt(x, top + s.px(15)), rgb(r, g, b));
    p.text(Face::Regular, "94% match", s.pxf(24), pt(x, top + s.px(55)), accent);

    let bar_top = top + s.px(90);
    let track = Bounds::new(x, bar_top, screen.x1 - s.px(35), bar_top + s.px(12));
    progress_bar(p, track, s.pxf(6), CONFIDENCE, accent);
}
