use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Disc centered on `center`, optionally ringed by a border.
///
/// The border lies inside `radius`; a transparent `paint` leaves only the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, paint: Paint, border: Option<Border>) -> Self {
        Self { center, radius, paint, border }
    }
}

impl DrawList {
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, paint, border)));
    }

    /// Filled disc, no border.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, Paint::Solid(color), None);
    }

    /// Ring only: transparent interior with `border` along the edge.
    #[inline]
    pub fn push_outlined_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, border: Border) {
        self.push_circle(z, center, radius, Paint::Solid(Color::transparent()), Some(border));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlined_circle_has_invisible_fill() {
        let mut list = DrawList::new();
        list.push_outlined_circle(ZIndex::new(0), Vec2::new(5.0, 5.0), 4.0, Border::new(1.0, Color::black()));
        let Some(DrawCmd::Circle(cmd)) = list.iter_in_paint_order().next().map(|i| i.cmd.clone()) else {
            panic!("expected a circle");
        };
        assert!(cmd.paint.is_invisible());
        assert_eq!(cmd.border.map(|b| b.width), Some(1.0));
    }
}
