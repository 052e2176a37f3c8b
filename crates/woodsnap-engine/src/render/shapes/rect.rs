use crate::coords::Rect;
use crate::render::Canvas;
use crate::scene::RectCmd;

use super::common::{pixel_bounds, pixel_center};

/// Rasterizes `DrawCmd::Rect`.
///
/// Coverage is the exact overlap of each pixel square with the rectangle, so
/// integer-aligned rectangles have hard edges and fractional edges blend.
pub fn fill(canvas: &mut Canvas, cmd: &RectCmd, clip: Option<Rect>) {
    if cmd.paint.is_invisible() {
        return;
    }
    let rect = cmd.rect.normalized();
    let Some(bounds) = pixel_bounds(rect, clip, canvas) else {
        return;
    };

    let (rx0, ry0) = (rect.origin.x, rect.origin.y);
    let (rx1, ry1) = (rx0 + rect.size.x, ry0 + rect.size.y);

    for (x, y) in bounds.pixels() {
        let (fx, fy) = (x as f32, y as f32);
        let cov_x = ((fx + 1.0).min(rx1) - fx.max(rx0)).clamp(0.0, 1.0);
        let cov_y = ((fy + 1.0).min(ry1) - fy.max(ry0)).clamp(0.0, 1.0);
        let cov = cov_x * cov_y;
        if cov > 0.0 {
            canvas.blend(x, y, cmd.paint.sample(pixel_center(x, y)).scaled(cov));
        }
    }
}
