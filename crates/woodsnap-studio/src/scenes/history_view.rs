//! Scan history: a stats banner over a list of recent identifications.

use woodsnap_engine::paint::Color;

use crate::grain::wood_grain;
use crate::layout::{Bounds, Scale, pt};
use crate::painter::Painter;
use crate::style::{FAINT, INK, PAPER, WHITE, rgb};
use crate::typeface::Face;

use super::screen_fill;

const STATS: [(&str, &str); 3] = [("47", "Scans"), ("23", "Species"), ("12", "Favorites")];

/// Name, date, confidence and thumbnail wood of each history row.
pub const SCANS: [(&str, &str, &str, [u8; 3]); 5] = [
    ("Red Oak", "Today, 2:34 PM", "94%", [178, 120, 60]),
    ("Black Walnut", "Today, 11:20 AM", "89%", [85, 55, 30]),
    ("Cherry", "Yesterday", "91%", [160, 85, 50]),
    ("White Pine", "Yesterday", "87%", [220, 195, 150]),
    ("Maple", "Mar 1", "96%", [210, 180, 140]),
];

fn banner(screen: Bounds, s: Scale) -> Bounds {
    let top = screen.y0 + s.px(15);
    Bounds::new(screen.x0 + s.px(15), top, screen.x1 - s.px(15), top + s.px(70))
}

/// Row boxes from the top, stopping at the first row that would run past
/// the screen bottom.
pub fn row_slots(screen: Bounds, s: Scale) -> Vec<Bounds> {
    let top = banner(screen, s).y0 + s.px(90);
    (0..SCANS.len() as i32)
        .map(|i| {
            let y = top + i * s.px(72);
            Bounds::new(screen.x0 + s.px(15), y, screen.x1 - s.px(15), y + s.px(65))
        })
        .take_while(|row| row.y1 <= screen.y1)
        .collect()
}

pub fn draw(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    screen_fill(p, screen, s, PAPER);
    stats_banner(p, screen, s, accent);

    let [wr, wg, wb] = WHITE;
    let [ir, ig, ib] = INK;
    let [fr, fg, fb] = FAINT;
    for (i, row) in row_slots(screen, s).into_iter().enumerate() {
        let (name, date, confidence, wood) = SCANS[i];
        p.fill_rounded_rect(row, s.pxf(10), rgb(wr, wg, wb));
        let thumb = Bounds::from_xywh(screen.x0 + s.px(25), row.y0 + s.px(8), s.px(50), s.px(50));
        wood_grain(p, thumb, wood, i as u64 * 13);

        let text_x = screen.x0 + s.px(90);
        p.text(Face::Regular, name, s.pxf(22), pt(text_x, row.y0 + s.px(12)), rgb(ir, ig, ib));
        p.text(Face::Regular, date, s.pxf(16), pt(text_x, row.y0 + s.px(38)), rgb(fr, fg, fb));
        p.text(
            Face::Regular,
            confidence,
            s.pxf(22),
            pt(screen.x1 - s.px(80), row.y0 + s.px(20)),
            accent,
        );
    }
}

fn stats_banner(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    let banner = banner(screen, s);
    p.fill_rounded_rect(banner, s.pxf(14), accent);

    let column = (screen.width() - s.px(30)) / 3;
    for (i, (count, label)) in STATS.into_iter().enumerate() {
        let mid = banner.x0 + i as i32 * column + column / 2;
        p.text(
            Face::Regular,
            count,
            s.pxf(28),
            pt(mid - s.px(12), banner.y0 + s.px(10)),
            rgb(255, 255, 255),
        );
        p.text(
            Face::Regular,
            label,
            s.pxf(14),
            pt(mid - s.px(20), banner.y0 + s.px(45)),
            rgb(255, 240, 210),
        );
    }
}
