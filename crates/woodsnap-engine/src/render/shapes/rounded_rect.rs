use crate::coords::{Rect, Vec2};
use crate::render::Canvas;
use crate::scene::RoundedRectCmd;

use super::common::{coverage, pixel_bounds, pixel_center, sd_box};

/// Rasterizes `DrawCmd::RoundedRect`.
///
/// Supported paints:
/// - `Paint::Solid`
/// - `Paint::LinearGradient` (any number of stops)
///
/// Borders are drawn as a ring of `border.width` pixels on the inner edge of
/// the shape, on top of the fill. A transparent fill with a border draws an
/// outline only.
pub fn fill(canvas: &mut Canvas, cmd: &RoundedRectCmd, clip: Option<Rect>) {
    let rect = cmd.rect.normalized();
    if rect.is_empty() {
        return;
    }
    let has_fill = !cmd.paint.is_invisible();
    let border = cmd.border.as_ref().filter(|b| b.width > 0.0 && b.color.a > 0.0);
    if !has_fill && border.is_none() {
        return;
    }
    let Some(bounds) = pixel_bounds(rect, clip, canvas) else {
        return;
    };

    let half = rect.size * 0.5;
    let center = rect.center();
    let radii = cmd.radii.clamped(half.x.min(half.y));

    for (x, y) in bounds.pixels() {
        let p = pixel_center(x, y);
        let local = p - center;

        // Corner radius for the quadrant this pixel lies in.
        let r = match (local.x >= 0.0, local.y >= 0.0) {
            (false, false) => radii.top_left,
            (true, false) => radii.top_right,
            (true, true) => radii.bottom_right,
            (false, true) => radii.bottom_left,
        };
        let d = sd_box(local, Vec2::new(half.x - r, half.y - r)) - r;

        let outer = coverage(d);
        if outer <= 0.0 {
            continue;
        }
        if has_fill {
            canvas.blend(x, y, cmd.paint.sample(p).scaled(outer));
        }
        if let Some(b) = border {
            let ring = outer - coverage(d + b.width);
            if ring > 0.0 {
                canvas.blend(x, y, b.color.scaled(ring));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CornerRadii;
    use crate::paint::{Color, Paint};
    use crate::scene::Border;

    fn solid(rect: Rect, radius: f32) -> RoundedRectCmd {
        RoundedRectCmd::new(rect, CornerRadii::all(radius), Paint::Solid(Color::white()), None)
    }

    #[test]
    fn corners_are_cut_center_is_filled() {
        let mut canvas = Canvas::new(40, 40, [0, 0, 0]);
        fill(&mut canvas, &solid(Rect::new(0.0, 0.0, 40.0, 40.0), 10.0), None);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(39, 39), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(20, 20), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(20, 0), Some([255, 255, 255]));
    }

    #[test]
    fn zero_radius_matches_plain_rect() {
        let mut canvas = Canvas::new(10, 10, [0, 0, 0]);
        fill(&mut canvas, &solid(Rect::new(2.0, 2.0, 4.0, 4.0), 0.0), None);
        assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(5, 5), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(6, 6), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(1, 2), Some([0, 0, 0]));
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let mut canvas = Canvas::new(20, 10, [0, 0, 0]);
        fill(&mut canvas, &solid(Rect::new(0.0, 0.0, 20.0, 10.0), 500.0), None);
        // Pill shape: middle row spans the full width minus the caps.
        assert_eq!(canvas.pixel(10, 5), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn outline_only_leaves_interior_untouched() {
        let mut canvas = Canvas::new(20, 20, [0, 0, 0]);
        let cmd = RoundedRectCmd::new(
            Rect::new(0.0, 0.0, 20.0, 20.0),
            CornerRadii::zero(),
            Paint::Solid(Color::transparent()),
            Some(Border::new(2.0, Color::white())),
        );
        fill(&mut canvas, &cmd, None);
        assert_eq!(canvas.pixel(0, 10), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(1, 10), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(2, 10), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0]));
    }
}
