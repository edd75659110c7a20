// MIT/Apache2 License

use super::{ControlPoints, VERTEX_TOLERANCE};
use crate::{Color, RenderOptions, Surface};
use easel_geometry::Point;
use tinyvec::tiny_vec;

/// The outline of a circle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Circle {
    center: Point,
    radius: i32,
    color: Color,
}

impl Circle {
    /// Create a new circle. A radius of zero or less is bumped to one.
    #[inline]
    pub fn new(center: Point, radius: i32, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(1),
            color,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Change the radius. A radius of zero or less is bumped to one.
    #[inline]
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius.max(1);
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn render<S: Surface + ?Sized>(&self, s: &mut S, options: &RenderOptions) {
        if options.antialiasing {
            s.draw_circle_aa(self.center, self.radius, self.color);
        } else {
            s.draw_circle(self.center, self.radius, self.color);
        }
    }

    /// A point hits the circle if it lies within a few pixels of the outline, on either side.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (point.distance_to(self.center) - self.radius as f32).abs() <= VERTEX_TOLERANCE as f32
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.translate(dx, dy);
    }

    /// The center and the rightmost point of the outline.
    #[inline]
    pub fn control_points(&self) -> ControlPoints {
        tiny_vec![self.center, self.center.translate(self.radius, 0)]
    }
}
