//! Species detail page for Black Walnut.

use woodsnap_engine::paint::Color;

use crate::grain::wood_grain;
use crate::layout::{Bounds, Scale, pt};
use crate::painter::Painter;
use crate::style::{INK, MUTED, PAPER, rgb};
use crate::typeface::Face;

use super::{portion, progress_bar, screen_fill};

/// Label, value and bar fraction of each property row.
pub const PROPERTIES: [(&str, &str, f64); 5] = [
    ("Janka Hardness", "1,010 lbf", 0.58),
    ("Density", "38 lbs/ft³", 0.55),
    ("Workability", "Excellent", 0.85),
    ("Price Range", "$8-14/bf", 0.65),
    ("Durability", "Very Good", 0.78),
];

/// Grain header across the top 30% of the screen.
pub fn header(screen: Bounds, s: Scale) -> Bounds {
    Bounds::from_xywh(
        screen.x0 + s.px(8),
        screen.y0 + s.px(8),
        screen.width() - s.px(16),
        portion(screen.height(), 0.30),
    )
}

/// Top of property row `i`; its value and bar sit below the label.
pub fn row_top(screen: Bounds, s: Scale, i: usize) -> i32 {
    screen.y0 + portion(screen.height(), 0.30) + s.px(20) + i as i32 * s.px(55)
}

pub fn draw(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    screen_fill(p, screen, s, PAPER);

    let header = header(screen, s);
    wood_grain(p, header, [130, 70, 40], 99);

    let x = screen.x0 + s.px(25);
    let title_y = screen.y0 + header.height() - s.px(60);
    p.text(Face::Regular, "Black Walnut", s.pxf(36), pt(x, title_y), rgb(255, 255, 255));
    p.text(
        Face::Regular,
        "Juglans nigra",
        s.pxf(20),
        pt(x, title_y + s.px(40)),
        rgb(220, 210, 195),
    );

    let [mr, mg, mb] = MUTED;
    let [ir, ig, ib] = INK;
    for (i, (label, value, fraction)) in PROPERTIES.into_iter().enumerate() {
        let y = row_top(screen, s, i);
        p.text(Face::Regular, label, s.pxf(18), pt(x, y), rgb(mr, mg, mb));
        p.text(Face::Regular, value, s.pxf(20), pt(x, y + s.px(22)), rgb(ir, ig, ib));

        let bar_y = y + s.px(46);
        let track = Bounds::new(x, bar_y, screen.x1 - s.px(25), bar_y + s.px(6));
        progress_bar(p, track, s.pxf(3), fraction, accent);
    }
}
