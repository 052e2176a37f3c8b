//! Species browser: search field, filter chips and a two-column card grid.

use woodsnap_engine::paint::Color;

use crate::grain::wood_grain;
use crate::layout::{Bounds, Scale, pt};
use crate::painter::Painter;
use crate::style::{FAINT, PAPER, WHITE, rgb};
use crate::typeface::Face;

use super::screen_fill;

const CHIPS: [&str; 4] = ["All", "Hardwood", "Softwood", "Exotic"];

/// Species shown in the grid with their swatch base colors.
pub const SPECIES: [(&str, [u8; 3]); 8] = [
    ("Red Oak", [178, 120, 60]),
    ("Walnut", [85, 55, 30]),
    ("Cherry", [160, 85, 50]),
    ("Maple", [210, 180, 140]),
    ("Mahogany", [120, 50, 30]),
    ("Pine", [220, 195, 150]),
    ("Teak", [150, 110, 50]),
    ("Ash", [200, 175, 140]),
];

fn search_top(screen: Bounds, s: Scale) -> i32 {
    screen.y0 + s.px(15)
}

fn chips_top(screen: Bounds, s: Scale) -> i32 {
    search_top(screen, s) + s.px(60)
}

/// Width of a filter chip for `label`.
pub fn chip_width(label: &str, s: Scale) -> i32 {
    s.px(90 + 5 * label.chars().count() as i32)
}

/// Card boxes in grid order, stopping at the first card that would run past
/// the bottom margin of the screen.
pub fn card_slots(screen: Bounds, s: Scale) -> Vec<Bounds> {
    let top = chips_top(screen, s) + s.px(50);
    let gap = s.px(12);
    let card_w = (screen.width() - s.px(40) - gap) / 2;
    let card_h = s.px(130);
    let limit = screen.y1 - s.px(10);

    (0..SPECIES.len() as i32)
        .map(|idx| {
            let (col, row) = (idx % 2, idx / 2);
            let x = screen.x0 + s.px(20) + col * (card_w + gap);
            let y = top + row * (card_h + gap);
            Bounds::from_xywh(x, y, card_w, card_h)
        })
        .take_while(|card| card.y1 <= limit)
        .collect()
}

pub fn draw(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    screen_fill(p, screen, s, PAPER);
    search_field(p, screen, s);
    filter_chips(p, screen, s, accent);

    let [wr, wg, wb] = WHITE;
    for (idx, card) in card_slots(screen, s).into_iter().enumerate() {
        let (name, base) = SPECIES[idx];
        p.fill_rounded_rect(card, s.pxf(12), rgb(wr, wg, wb));
        let swatch = Bounds::from_xywh(
            card.x0 + s.px(8),
            card.y0 + s.px(8),
            card.width() - s.px(16),
            card.height() - s.px(45),
        );
        wood_grain(p, swatch, base, idx as u64 * 7);
        p.text(
            Face::Regular,
            name,
            s.pxf(16),
            pt(card.x0 + s.px(12), card.y1 - s.px(30)),
            rgb(60, 40, 25),
        );
    }
}

fn search_field(p: &mut Painter<'_>, screen: Bounds, s: Scale) {
    let top = search_top(screen, s);
    let field = Bounds::new(screen.x0 + s.px(20), top, screen.x1 - s.px(20), top + s.px(45));
    p.fill_rounded_rect(field, s.pxf(12), rgb(235, 228, 218));

    let [r, g, b] = FAINT;
    let ink = rgb(r, g, b);

    // Magnifier: lens plus a short handle towards the lower right.
    let lens_r = s.px(7);
    let (cx, cy) = (screen.x0 + s.px(40) + lens_r, top + s.px(20));
    p.stroke_circle(pt(cx, cy), lens_r as f32, s.pxf(2).max(1.0), ink);
    let handle = s.px(6);
    let start = lens_r * 7 / 10;
    p.line(
        pt(cx + start, cy + start),
        pt(cx + start + handle, cy + start + handle),
        s.pxf(3).max(1.0),
        ink,
    );

    p.text(
        Face::Regular,
        "Search species...",
        s.pxf(20),
        pt(screen.x0 + s.px(70), top + s.px(12)),
        ink,
    );
}

fn filter_chips(p: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    let top = chips_top(screen, s);
    let mut x = screen.x0 + s.px(20);
    for (i, label) in CHIPS.into_iter().enumerate() {
        let w = chip_width(label, s);
        let chip = Bounds::from_xywh(x, top, w, s.px(32));
        let (fill, ink) = if i == 0 {
            (accent, rgb(255, 255, 255))
        } else {
            (rgb(225, 218, 208), rgb(100, 75, 50))
        };
        p.fill_rounded_rect(chip, s.pxf(16), fill);
        p.text(Face::Regular, label, s.pxf(18), pt(x + s.px(12), top + s.px(6)), ink);
        x += w + s.px(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_width_grows_with_label() {
        let s = Scale::new(1320);
        assert_eq!(chip_width("All", s), 105);
        assert_eq!(chip_width("Hardwood", s), 130);
    }

    #[test]
    fn all_cards_fit_on_a_tall_screen() {
        let screen = Bounds::new(259, 1097, 1061, 2515);
        let cards = card_slots(screen, Scale::new(1320));
        assert_eq!(cards.len(), SPECIES.len());
        // Two columns of equal width.
        assert_eq!(cards[0].y0, cards[1].y0);
        assert_eq!(cards[0].width(), cards[1].width());
        assert!(cards[1].x0 > cards[0].x1);
    }

    #[test]
    fn grid_stops_at_the_first_overflowing_row() {
        let s = Scale::new(1320);
        // Room for the header plus two rows of cards.
        let screen = Bounds::new(0, 0, 800, 15 + 60 + 50 + 130 + 12 + 130 + 10 + 5);
        let cards = card_slots(screen, s);
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.y1 <= screen.y1 - 10));
    }
}
