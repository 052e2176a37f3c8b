use crate::coords::Rect;
use crate::render::Canvas;
use crate::scene::CircleCmd;

use super::common::{coverage, pixel_bounds, pixel_center};

/// Rasterizes `DrawCmd::Circle`, with the optional border drawn as an inner ring.
pub fn fill(canvas: &mut Canvas, cmd: &CircleCmd, clip: Option<Rect>) {
    if cmd.radius <= 0.0 {
        return;
    }
    let has_fill = !cmd.paint.is_invisible();
    let border = cmd.border.as_ref().filter(|b| b.width > 0.0 && b.color.a > 0.0);
    if !has_fill && border.is_none() {
        return;
    }

    let r = cmd.radius;
    let bbox = Rect::new(cmd.center.x - r, cmd.center.y - r, 2.0 * r, 2.0 * r);
    let Some(bounds) = pixel_bounds(bbox, clip, canvas) else {
        return;
    };

    for (x, y) in bounds.pixels() {
        let p = pixel_center(x, y);
        let d = (p - cmd.center).length() - r;
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
    use crate::coords::Vec2;
    use crate::paint::{Color, Paint};

    #[test]
    fn fills_disc_only() {
        let mut canvas = Canvas::new(20, 20, [0, 0, 0]);
        let cmd = CircleCmd::new(Vec2::new(10.0, 10.0), 6.0, Paint::Solid(Color::white()), None);
        fill(&mut canvas, &cmd, None);
        assert_eq!(canvas.pixel(10, 10), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(10, 5), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(4, 4), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(17, 10), Some([0, 0, 0]));
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut canvas = Canvas::new(4, 4, [0, 0, 0]);
        let cmd = CircleCmd::new(Vec2::new(2.0, 2.0), 0.0, Paint::Solid(Color::white()), None);
        fill(&mut canvas, &cmd, None);
        assert!(canvas.as_raw().iter().all(|&b| b == 0));
    }
}
