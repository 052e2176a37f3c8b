use crate::coords::{Rect, Vec2};
use crate::render::Canvas;
use crate::scene::LineCmd;

use super::common::{coverage, pixel_bounds, pixel_center, sd_box};

/// Rasterizes `DrawCmd::Line` as an oriented box (butt caps).
pub fn stroke(canvas: &mut Canvas, cmd: &LineCmd, clip: Option<Rect>) {
    let axis = cmd.to - cmd.from;
    let len = axis.length();
    if len <= 0.0 || cmd.width <= 0.0 || cmd.color.a <= 0.0 {
        return;
    }
    let dir = axis / len;
    let normal = Vec2::new(-dir.y, dir.x);
    let half = Vec2::new(len * 0.5, cmd.width * 0.5);
    let mid = (cmd.from + cmd.to) * 0.5;

    let hw = cmd.width * 0.5;
    let bbox = Rect::from_corners(
        cmd.from.x.min(cmd.to.x) - hw,
        cmd.from.y.min(cmd.to.y) - hw,
        cmd.from.x.max(cmd.to.x) + hw,
        cmd.from.y.max(cmd.to.y) + hw,
    );
    let Some(bounds) = pixel_bounds(bbox, clip, canvas) else {
        return;
    };

    for (x, y) in bounds.pixels() {
        let rel = pixel_center(x, y) - mid;
        let local = Vec2::new(rel.dot(dir), rel.dot(normal));
        let cov = coverage(sd_box(local, half));
        if cov > 0.0 {
            canvas.blend(x, y, cmd.color.scaled(cov));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn line(from: (f32, f32), to: (f32, f32), width: f32) -> LineCmd {
        LineCmd {
            from: Vec2::new(from.0, from.1),
            to: Vec2::new(to.0, to.1),
            width,
            color: Color::white(),
        }
    }

    #[test]
    fn horizontal_line_covers_width_rows() {
        let mut canvas = Canvas::new(10, 10, [0, 0, 0]);
        stroke(&mut canvas, &line((2.0, 5.0), (8.0, 5.0), 2.0), None);
        assert_eq!(canvas.pixel(4, 4), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(4, 5), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(4, 6), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(4, 3), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(8, 5), Some([0, 0, 0]));
    }

    #[test]
    fn vertical_line_covers_columns() {
        let mut canvas = Canvas::new(10, 10, [0, 0, 0]);
        stroke(&mut canvas, &line((5.0, 1.0), (5.0, 9.0), 4.0), None);
        for x in 3..7 {
            assert_eq!(canvas.pixel(x, 5), Some([255, 255, 255]), "x = {x}");
        }
        assert_eq!(canvas.pixel(7, 5), Some([0, 0, 0]));
    }

    #[test]
    fn degenerate_line_is_skipped() {
        let mut canvas = Canvas::new(4, 4, [0, 0, 0]);
        stroke(&mut canvas, &line((1.0, 1.0), (1.0, 1.0), 3.0), None);
        assert!(canvas.as_raw().iter().all(|&b| b == 0));
    }
}
