// MIT/Apache2 License

use super::{draw_outline, ControlPoints, VERTEX_TOLERANCE};
use crate::{Color, FillRule, RenderOptions, Surface, Texture};
use easel_geometry::{Bounds, Point};
use euclid::default::Point2D;
use tinyvec::tiny_vec;

/// How close, in pixels, a point has to be to a corner to grab it for resizing.
pub const RESIZE_HANDLE_RADIUS: i32 = 10;

/// A corner of a rectangle that can be dragged to resize it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl ResizeHandle {
    /// The same handle, mirrored across the vertical and/or horizontal axis.
    #[inline]
    fn mirrored(self, horizontally: bool, vertically: bool) -> Self {
        use ResizeHandle::*;

        let handle = match (self, horizontally) {
            (TopLeft, true) => TopRight,
            (TopRight, true) => TopLeft,
            (BottomRight, true) => BottomLeft,
            (BottomLeft, true) => BottomRight,
            (handle, false) => handle,
        };
        match (handle, vertically) {
            (TopLeft, true) => BottomLeft,
            (BottomLeft, true) => TopLeft,
            (TopRight, true) => BottomRight,
            (BottomRight, true) => TopRight,
            (handle, false) => handle,
        }
    }
}

/// An axis-aligned rectangle.
///
/// The corners are kept normalized: `top_left` is never to the right of or below `bottom_right`, no matter
/// how the rectangle is created, moved or resized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rectangle {
    top_left: Point,
    bottom_right: Point,
    color: Color,
    thickness: u32,
    fill: Option<FillRule>,
}

impl Rectangle {
    /// Create a new rectangle from any two opposite corners. A thickness of zero is bumped to one.
    #[inline]
    pub fn new(corner: Point, opposite: Point, color: Color, thickness: u32) -> Self {
        let mut rectangle = Self {
            top_left: corner,
            bottom_right: opposite,
            color,
            thickness: thickness.max(1),
            fill: None,
        };
        rectangle.normalize();
        rectangle
    }

    #[inline]
    fn normalize(&mut self) {
        let (a, b) = (self.top_left, self.bottom_right);
        self.top_left = Point::new(a.x.min(b.x), a.y.min(b.y));
        self.bottom_right = Point::new(a.x.max(b.x), a.y.max(b.y));
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Replace both corners.
    #[inline]
    pub fn set_corners(&mut self, corner: Point, opposite: Point) {
        self.top_left = corner;
        self.bottom_right = opposite;
        self.normalize();
    }

    #[inline]
    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The fill of the interior, if any.
    #[inline]
    pub fn fill(&self) -> Option<&FillRule> {
        self.fill.as_ref()
    }

    #[inline]
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill = Some(FillRule::SolidColor(color));
    }

    #[inline]
    pub fn set_fill_texture(&mut self, texture: Texture) {
        self.fill = Some(FillRule::Texture(texture));
    }

    #[inline]
    pub fn set_fill(&mut self, fill: Option<FillRule>) {
        self.fill = fill;
    }

    #[inline]
    pub fn disable_fill(&mut self) {
        self.fill = None;
    }

    /// Rectangles are always convex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        true
    }

    /// The corners in clockwise order, starting at the top left.
    #[inline]
    pub fn vertices(&self) -> [Point; 4] {
        let (tl, br) = (self.top_left, self.bottom_right);
        [tl, Point::new(br.x, tl.y), br, Point::new(tl.x, br.y)]
    }

    /// The box covered by the rectangle, including its outline.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            Point2D::new(self.top_left.x, self.top_left.y),
            Point2D::new(self.bottom_right.x, self.bottom_right.y),
        )
    }

    /// The pixels strictly inside the outline, or `None` if there aren't enough of them to fill.
    #[inline]
    fn interior(&self) -> Option<Bounds> {
        let (left, top) = (self.top_left.x + 1, self.top_left.y + 1);
        let (right, bottom) = (self.bottom_right.x - 1, self.bottom_right.y - 1);
        if left >= right || top >= bottom {
            None
        } else {
            Some(Bounds::new(Point2D::new(left, top), Point2D::new(right, bottom)))
        }
    }

    /// Render the fill, then the outline on top of it.
    #[inline]
    pub fn render<S: Surface + ?Sized>(&self, s: &mut S, options: &RenderOptions) {
        if let (Some(fill), Some(interior)) = (&self.fill, self.interior()) {
            s.fill_rectangle(interior, fill);
        }

        draw_outline(s, &self.vertices(), self.color, self.thickness, options);
    }

    /// A point hits the rectangle if it is near a corner or an edge. Filled rectangles are also hit
    /// anywhere inside.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        if self
            .vertices()
            .iter()
            .any(|corner| corner.is_near(point, VERTEX_TOLERANCE))
        {
            return true;
        }

        let (tl, br) = (self.top_left, self.bottom_right);
        let reach = self.thickness as i32 + VERTEX_TOLERANCE;
        let within_x = (tl.x..=br.x).contains(&point.x);
        let within_y = (tl.y..=br.y).contains(&point.y);

        if within_x && ((point.y - tl.y).abs() <= reach || (point.y - br.y).abs() <= reach) {
            return true;
        }
        if within_y && ((point.x - tl.x).abs() <= reach || (point.x - br.x).abs() <= reach) {
            return true;
        }

        self.fill.is_some()
            && point.x > tl.x
            && point.x < br.x
            && point.y > tl.y
            && point.y < br.y
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.top_left = self.top_left.translate(dx, dy);
        self.bottom_right = self.bottom_right.translate(dx, dy);
    }

    #[inline]
    pub fn control_points(&self) -> ControlPoints {
        let [a, b, c, d] = self.vertices();
        tiny_vec![a, b, c, d]
    }

    /// The corner handle under `point`, if any. Corners are tried clockwise from the top left.
    #[inline]
    pub fn resize_handle_at(&self, point: Point) -> Option<ResizeHandle> {
        let handles = [
            ResizeHandle::TopLeft,
            ResizeHandle::TopRight,
            ResizeHandle::BottomRight,
            ResizeHandle::BottomLeft,
        ];

        self.vertices()
            .iter()
            .zip(handles)
            .find(|(corner, _)| corner.is_near(point, RESIZE_HANDLE_RADIUS))
            .map(|(_, handle)| handle)
    }

    /// Move the corner under `handle` to `point`.
    ///
    /// Dragging a corner past the opposite one flips the rectangle. The returned handle is the corner that
    /// `point` ended up as, which is what further drags should use.
    #[inline]
    pub fn resize_by_handle(&mut self, handle: ResizeHandle, point: Point) -> ResizeHandle {
        match handle {
            ResizeHandle::TopLeft => self.top_left = point,
            ResizeHandle::TopRight => {
                self.top_left.y = point.y;
                self.bottom_right.x = point.x;
            }
            ResizeHandle::BottomRight => self.bottom_right = point,
            ResizeHandle::BottomLeft => {
                self.top_left.x = point.x;
                self.bottom_right.y = point.y;
            }
        }

        let flipped_x = self.top_left.x > self.bottom_right.x;
        let flipped_y = self.top_left.y > self.bottom_right.y;
        self.normalize();
        handle.mirrored(flipped_x, flipped_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageFormat, PixelBuffer};

    fn rect() -> Rectangle {
        Rectangle::new(Point::new(30, 20), Point::new(10, 40), Color::BLACK, 1)
    }

    #[test]
    fn corners_are_normalized() {
        let r = rect();
        assert_eq!(r.top_left(), Point::new(10, 20));
        assert_eq!(r.bottom_right(), Point::new(30, 40));

        let mut r = r;
        r.set_corners(Point::new(5, 5), Point::new(0, 0));
        assert_eq!(r.top_left(), Point::new(0, 0));
        assert_eq!(r.bottom_right(), Point::new(5, 5));
    }

    #[test]
    fn resize_handles() {
        let r = rect();
        assert_eq!(r.resize_handle_at(Point::new(12, 22)), Some(ResizeHandle::TopLeft));
        assert_eq!(r.resize_handle_at(Point::new(38, 20)), Some(ResizeHandle::TopRight));
        assert_eq!(r.resize_handle_at(Point::new(30, 40)), Some(ResizeHandle::BottomRight));
        assert_eq!(r.resize_handle_at(Point::new(10, 49)), Some(ResizeHandle::BottomLeft));
        assert_eq!(r.resize_handle_at(Point::new(20, 30)), None);
    }

    #[test]
    fn resizing_past_the_opposite_corner_flips() {
        let mut r = rect();
        let handle = r.resize_by_handle(ResizeHandle::TopRight, Point::new(40, 10));
        assert_eq!(handle, ResizeHandle::TopRight);
        assert_eq!((r.top_left(), r.bottom_right()), (Point::new(10, 10), Point::new(40, 40)));

        let handle = r.resize_by_handle(ResizeHandle::TopRight, Point::new(0, 50));
        assert_eq!(handle, ResizeHandle::BottomLeft);
        assert_eq!((r.top_left(), r.bottom_right()), (Point::new(0, 40), Point::new(10, 50)));
    }

    #[test]
    fn hit_testing() {
        let mut r = rect();
        assert!(r.contains(Point::new(20, 20)));
        assert!(r.contains(Point::new(20, 26)));
        assert!(r.contains(Point::new(36, 30)));
        assert!(!r.contains(Point::new(20, 30)));
        assert!(!r.contains(Point::new(50, 50)));

        r.set_fill_color(Color::WHITE);
        assert!(r.contains(Point::new(20, 30)));
        r.disable_fill();
        assert!(!r.contains(Point::new(20, 30)));
    }

    #[test]
    fn fill_stays_inside_the_outline() {
        let mut r = Rectangle::new(Point::new(2, 2), Point::new(12, 8), Color::BLACK, 1);
        let red = Color::rgb(255, 0, 0);
        r.set_fill_color(red);

        let mut buffer = PixelBuffer::new(15, 15);
        r.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.count(red), 9 * 5);
        assert_eq!(buffer.count(Color::BLACK), 2 * 11 + 2 * 5);
    }

    #[test]
    fn too_thin_to_fill() {
        let mut r = Rectangle::new(Point::new(2, 2), Point::new(4, 8), Color::BLACK, 1);
        r.set_fill_color(Color::WHITE);
        let mut buffer = PixelBuffer::new(15, 15);
        r.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.count(Color::WHITE), 0);
    }

    #[test]
    fn texture_tiles_from_the_interior() {
        let texture = Texture::from_bytes(&[0, 255], 2, 1, ImageFormat::Grayscale).unwrap();
        let mut r = Rectangle::new(Point::new(0, 0), Point::new(6, 3), Color::rgb(255, 0, 0), 1);
        r.set_fill_texture(texture);
        assert!(r.fill().unwrap().uses_texture());

        let mut buffer = PixelBuffer::new(10, 10);
        r.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(buffer.pixel(2, 1), Some(Color::WHITE));
        assert_eq!(buffer.pixel(3, 2), Some(Color::BLACK));
    }
}
