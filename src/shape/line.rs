// MIT/Apache2 License

use super::{ControlPoints, VERTEX_TOLERANCE};
use crate::{Color, RenderOptions, Surface};
use easel_geometry::{Point, Segment};
use tinyvec::tiny_vec;

/// The kind of pen a line is drawn with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PenType {
    /// Always one pixel wide.
    Regular,
    /// A round brush as wide as the line's thickness.
    Brush,
}

impl Default for PenType {
    #[inline]
    fn default() -> Self {
        PenType::Regular
    }
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    start: Point,
    end: Point,
    color: Color,
    thickness: u32,
    pen: PenType,
}

impl Line {
    /// Create a new line. A thickness of zero is bumped to one.
    #[inline]
    pub fn new(start: Point, end: Point, color: Color, thickness: u32, pen: PenType) -> Self {
        Self {
            start,
            end,
            color,
            thickness: thickness.max(1),
            pen,
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Move the end point, keeping the start in place.
    #[inline]
    pub fn set_end(&mut self, end: Point) {
        self.end = end;
    }

    #[inline]
    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    #[inline]
    pub fn pen(&self) -> PenType {
        self.pen
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
            s.draw_line_aa(self.start, self.end, self.color);
        } else if self.pen == PenType::Regular || self.thickness == 1 {
            s.draw_line(self.start, self.end, self.color);
        } else {
            s.draw_thick_line(self.start, self.end, self.color, self.thickness);
        }
    }

    /// A point hits the line if it is within the line's thickness, plus some slack, of the segment.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        let segment = Segment::from_points(self.start, self.end);
        if segment.is_degenerate() {
            return (point.x - self.start.x).abs() <= VERTEX_TOLERANCE
                && (point.y - self.start.y).abs() <= VERTEX_TOLERANCE;
        }

        segment.distance_to_point(point) <= (self.thickness as i32 + VERTEX_TOLERANCE) as f32
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.translate(dx, dy);
        self.end = self.end.translate(dx, dy);
    }

    #[inline]
    pub fn control_points(&self) -> ControlPoints {
        tiny_vec![self.start, self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelBuffer;

    #[test]
    fn zero_thickness_is_bumped() {
        let line = Line::new(Point::new(0, 0), Point::new(5, 5), Color::BLACK, 0, PenType::Brush);
        assert_eq!(line.thickness(), 1);
    }

    #[test]
    fn hit_testing() {
        let line = Line::new(Point::new(10, 10), Point::new(50, 10), Color::BLACK, 2, PenType::Brush);
        assert!(line.contains(Point::new(30, 10)));
        assert!(line.contains(Point::new(30, 17)));
        assert!(!line.contains(Point::new(30, 18)));
        // past the end, the distance is measured to the end point
        assert!(line.contains(Point::new(55, 10)));
        assert!(!line.contains(Point::new(60, 10)));

        let dot = Line::new(Point::new(10, 10), Point::new(10, 10), Color::BLACK, 1, PenType::Regular);
        assert!(dot.contains(Point::new(15, 5)));
        assert!(!dot.contains(Point::new(16, 10)));
    }

    #[test]
    fn regular_pen_ignores_thickness() {
        let line = Line::new(Point::new(2, 5), Point::new(12, 5), Color::BLACK, 5, PenType::Regular);
        let mut buffer = PixelBuffer::new(15, 15);
        line.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.count(Color::BLACK), 11);

        let brush = Line::new(Point::new(2, 5), Point::new(12, 5), Color::BLACK, 5, PenType::Brush);
        let mut buffer = PixelBuffer::new(15, 15);
        brush.render(&mut buffer, &RenderOptions::default());
        assert!(buffer.count(Color::BLACK) > 11);
        assert_eq!(buffer.pixel(7, 7), Some(Color::BLACK));
    }

    #[test]
    fn antialiasing_overrides_the_brush() {
        let brush = Line::new(Point::new(2, 5), Point::new(12, 5), Color::BLACK, 5, PenType::Brush);
        let mut buffer = PixelBuffer::filled(15, 15, Color::WHITE);
        brush.render(&mut buffer, &RenderOptions::antialiased());
        assert_eq!(buffer.pixel(7, 7), Some(Color::WHITE));
        assert_eq!(buffer.pixel(7, 5), Some(Color::BLACK));
    }

    #[test]
    fn moving() {
        let mut line = Line::new(Point::new(0, 0), Point::new(5, 5), Color::BLACK, 1, PenType::Regular);
        line.translate(3, -2);
        assert_eq!(line.control_points().as_slice(), &[Point::new(3, -2), Point::new(8, 3)]);
    }
}
