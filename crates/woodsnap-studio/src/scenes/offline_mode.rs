//! On-device identification without a network connection.

use woodsnap_engine::paint::Color;

use crate::grain::wood_grain;
use crate::layout::{Bounds, Scale, pt};
use crate::painter::Painter;
use crate::style::{INK, MUTED, VIEWFINDER, WHITE, rgb};
use crate::typeface::Face;

use super::{camera_scan, screen_fill};

/// Card stating that the model runs locally.
fn model_card(screen: Bounds, s: Scale) -> Bounds {
    let top = camera_scan::preview(screen, s).y1 + s.px(20);
    Bounds::new(screen.x0 + s.px(15), top, screen.x1 - s.px(15), top + s.px(70))
}

/// The offline result card, present only when it ends above the screen bottom.
pub fn result_card(screen: Bounds, s: Scale) -> Option<Bounds> {
    let top = model_card(screen, s).y0 + s.px(85);
    let card = Bounds::new(screen.x0 + s.px(15), top, screen.x1 - s.px(15), top + s.px(60));
    (card.y1 < screen.y1).then_some(card)
}

pub fn draw(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    screen_fill(p, screen, s, VIEWFINDER);

    let view = camera_scan::preview(screen, s);
    wood_grain(p, view, [145, 95, 50], 77);

    let (badge_w, badge_h) = (s.px(180), s.px(40));
    let badge = Bounds::from_xywh(
        screen.x0 + (screen.width() - badge_w) / 2,
        view.y0 + s.px(15),
        badge_w,
        badge_h,
    );
    p.fill_rounded_rect(badge, s.pxf(20), rgb(60, 60, 60));
    p.text(
        Face::Regular,
        "Offline Mode",
        s.pxf(18),
        pt(badge.x0 + s.px(15), badge.y0 + s.px(10)),
        rgb(255, 255, 255),
    );

    let [wr, wg, wb] = WHITE;
    let text_x = screen.x0 + s.px(30);

    let model = model_card(screen, s);
    let [ir, ig, ib] = INK;
    let [mr, mg, mb] = MUTED;
    p.fill_rounded_rect(model, s.pxf(14), rgb(wr, wg, wb));
    p.text(
        Face::Regular,
        "CoreML On-Device",
        s.pxf(22),
        pt(text_x, model.y0 + s.px(12)),
        rgb(ir, ig, ib),
    );
    p.text(
        Face::Regular,
        "No internet required",
        s.pxf(16),
        pt(text_x, model.y0 + s.px(40)),
        rgb(mr, mg, mb),
    );

    if let Some(result) = result_card(screen, s) {
        p.fill_rounded_rect(result, s.pxf(14), rgb(wr, wg, wb));
        p.text(
            Face::Regular,
            "White Oak — 88% match",
            s.pxf(22),
            pt(text_x, result.y0 + s.px(10)),
            accent,
        );
        p.text(
            Face::Regular,
            "Identified offline",
            s.pxf(14),
            pt(text_x, result.y0 + s.px(38)),
            rgb(150, 140, 120),
        );
    }
}
