//! The six mock app screens.
//!
//! Each scene is a free `draw` function taking the painter, the phone screen
//! region, the canvas [`Scale`] and the screenshot accent color. Scenes share
//! no state; everything they record is clipped to the screen region.

pub mod camera_scan;
pub mod compare_mode;
pub mod database_grid;
pub mod detail_card;
pub mod history_view;
pub mod offline_mode;

use woodsnap_engine::paint::Color;

use crate::catalog::SceneKind;
use crate::layout::{Bounds, Scale};
use crate::painter::Painter;
use crate::style::{TRACK, rgb};

/// Draws the scene `kind` into `screen`.
pub fn draw(kind: SceneKind, painter: &mut Painter<'_>, screen: Bounds, s: Scale, accent: Color) {
    painter.push_clip(screen);
    match kind {
        SceneKind::CameraScan => camera_scan::draw(painter, screen, s, accent),
        SceneKind::DatabaseGrid => database_grid::draw(painter, screen, s, accent),
        SceneKind::DetailCard => detail_card::draw(painter, screen, s, accent),
        SceneKind::CompareMode => compare_mode::draw(painter, screen, s, accent),
        SceneKind::HistoryView => history_view::draw(painter, screen, s, accent),
        SceneKind::OfflineMode => offline_mode::draw(painter, screen, s, accent),
    }
    painter.pop_clip();
}

/// Rounded screen background.
fn screen_fill(painter: &mut Painter<'_>, screen: Bounds, s: Scale, color: [u8; 3]) {
    let [r, g, b] = color;
    painter.fill_rounded_rect(screen, s.pxf(32), rgb(r, g, b));
}

/// `floor(length * fraction)`.
#[inline]
fn portion(length: i32, fraction: f64) -> i32 {
    (length as f64 * fraction).floor() as i32
}

/// Horizontal progress bar: a track spanning `track` and a fill covering
/// `fraction` of it from the left.
fn progress_bar(painter: &mut Painter<'_>, track: Bounds, radius: f32, fraction: f64, fill: Color) {
    let [r, g, b] = TRACK;
    painter.fill_rounded_rect(track, radius, rgb(r, g, b));
    let filled = Bounds::new(track.x0, track.y0, track.x0 + portion(track.width(), fraction), track.y1);
    painter.fill_rounded_rect(filled, radius, fill);
}
