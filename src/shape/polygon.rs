// MIT/Apache2 License

use super::{draw_outline, ControlPoints, VERTEX_TOLERANCE};
use crate::{Color, FillRule, RenderOptions, Surface, Texture};
use easel_geometry::{self as geometry, Point, DEFAULT_SIMPLIFY_THRESHOLD};

/// A closed polygon. The order of the vertices is the winding order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    vertices: Vec<Point>,
    color: Color,
    thickness: u32,
    fill: Option<FillRule>,
}

impl Polygon {
    /// Create a new, unfilled polygon. A thickness of zero is bumped to one.
    #[inline]
    pub fn new(vertices: Vec<Point>, color: Color, thickness: u32) -> Self {
        Self {
            vertices,
            color,
            thickness: thickness.max(1),
            fill: None,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Add a vertex after the last one.
    #[inline]
    pub fn push_vertex(&mut self, vertex: Point) {
        self.vertices.push(vertex);
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

    /// Tell if the polygon, once near-duplicate vertices are dropped, is convex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        geometry::is_convex(&self.vertices)
    }

    /// Tell if no two non-adjacent edges cross.
    #[inline]
    pub fn is_simple(&self) -> bool {
        geometry::is_simple(&self.vertices)
    }

    /// Clip this polygon against a convex `clipper`.
    ///
    /// Both polygons are simplified first. The result keeps this polygon's outline and fill, and is `None`
    /// if less than a triangle is left.
    pub fn clip_with(&self, clipper: &[Point]) -> Option<Polygon> {
        let subject = geometry::simplify(&self.vertices, DEFAULT_SIMPLIFY_THRESHOLD);
        let clipper = geometry::simplify(clipper, DEFAULT_SIMPLIFY_THRESHOLD);

        let clipped = geometry::sutherland_hodgman(&subject, &clipper);
        log::debug!(
            "Clipped {} vertices against {} into {}",
            subject.len(),
            clipper.len(),
            clipped.len()
        );

        if clipped.len() < 3 {
            return None;
        }

        Some(Polygon {
            vertices: clipped,
            color: self.color,
            thickness: self.thickness,
            fill: self.fill.clone(),
        })
    }

    /// Render the fill, then the outline on top of it. Fewer than three vertices draw nothing.
    #[inline]
    pub fn render<S: Surface + ?Sized>(&self, s: &mut S, options: &RenderOptions) {
        if self.vertices.len() < 3 {
            return;
        }

        if let Some(fill) = &self.fill {
            let simplified = geometry::simplify(&self.vertices, options.simplify_threshold);
            s.fill_polygon(&simplified, fill, options.fill_algorithm);
        }

        draw_outline(s, &self.vertices, self.color, self.thickness, options);
    }

    /// A point hits the polygon if it is near a vertex or an edge. Filled polygons are also hit anywhere
    /// inside.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        if self
            .vertices
            .iter()
            .any(|vertex| vertex.is_near(point, VERTEX_TOLERANCE))
        {
            return true;
        }

        let reach = (self.thickness as i32 + VERTEX_TOLERANCE) as f32;
        if geometry::segments(&self.vertices)
            .filter(|edge| !edge.is_degenerate())
            .any(|edge| edge.distance_to_point(point) <= reach)
        {
            return true;
        }

        self.fill.is_some() && geometry::contains_point(&self.vertices, point)
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.vertices
            .iter_mut()
            .for_each(|vertex| *vertex = vertex.translate(dx, dy));
    }

    /// Every vertex.
    #[inline]
    pub fn control_points(&self) -> ControlPoints {
        self.vertices.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FillAlgorithm, ImageFormat, PixelBuffer};

    fn square(min: i32, max: i32) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    }

    #[test]
    fn too_few_vertices_draw_nothing() {
        let mut polygon = Polygon::new(vec![Point::new(1, 1), Point::new(8, 8)], Color::BLACK, 1);
        polygon.set_fill_color(Color::BLACK);
        let mut buffer = PixelBuffer::new(10, 10);
        polygon.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.count(Color::BLACK), 0);
    }

    #[test]
    fn outline_is_drawn_over_the_fill() {
        let red = Color::rgb(255, 0, 0);
        let mut polygon = Polygon::new(square(10, 20), Color::BLACK, 1);
        polygon.set_fill_color(red);

        let mut buffer = PixelBuffer::new(30, 30);
        polygon.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.count(Color::BLACK), 40);
        assert_eq!(buffer.count(red), 81);
        assert_eq!(buffer.pixel(15, 15), Some(red));
        assert_eq!(buffer.pixel(10, 15), Some(Color::BLACK));
    }

    #[test]
    fn both_fill_algorithms_fill_the_inside() {
        let red = Color::rgb(255, 0, 0);
        let mut polygon = Polygon::new(square(10, 20), Color::BLACK, 1);
        polygon.set_fill_color(red);

        let options = RenderOptions {
            fill_algorithm: FillAlgorithm::EdgeTable,
            ..RenderOptions::default()
        };
        let mut buffer = PixelBuffer::new(30, 30);
        polygon.render(&mut buffer, &options);
        assert_eq!(buffer.count(red), 81);
    }

    #[test]
    fn texture_fill() {
        let texture = Texture::from_bytes(&[255, 255], 1, 2, ImageFormat::Grayscale).unwrap();
        let mut polygon = Polygon::new(square(2, 8), Color::BLACK, 1);
        polygon.set_fill_texture(texture);
        assert!(polygon.fill().unwrap().uses_texture());

        let mut buffer = PixelBuffer::new(10, 10);
        polygon.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.pixel(5, 5), Some(Color::WHITE));
        assert_eq!(buffer.pixel(2, 5), Some(Color::BLACK));
    }

    #[test]
    fn hit_testing() {
        let mut polygon = Polygon::new(square(10, 50), Color::BLACK, 1);
        assert!(polygon.contains(Point::new(13, 13)));
        assert!(polygon.contains(Point::new(30, 16)));
        assert!(polygon.contains(Point::new(56, 30)));
        assert!(!polygon.contains(Point::new(30, 30)));
        assert!(!polygon.contains(Point::new(70, 70)));

        polygon.set_fill_color(Color::WHITE);
        assert!(polygon.contains(Point::new(30, 30)));
        polygon.disable_fill();
        assert!(polygon.fill().is_none());
        assert!(!polygon.contains(Point::new(30, 30)));
    }

    #[test]
    fn convexity() {
        assert!(Polygon::new(square(0, 10), Color::BLACK, 1).is_convex());

        let arrow = vec![
            Point::new(0, 0),
            Point::new(20, 10),
            Point::new(0, 20),
            Point::new(8, 10),
        ];
        assert!(!Polygon::new(arrow, Color::BLACK, 1).is_convex());

        let mut polygon = Polygon::new(vec![Point::new(0, 0), Point::new(10, 0)], Color::BLACK, 1);
        assert!(!polygon.is_convex());
        polygon.push_vertex(Point::new(5, 8));
        assert!(polygon.is_convex());
        assert!(polygon.is_simple());
    }

    #[test]
    fn clipping_keeps_the_style() {
        let mut subject = Polygon::new(square(0, 20), Color::rgb(0, 0, 255), 3);
        subject.set_fill_color(Color::WHITE);

        let clipped = subject.clip_with(&square(10, 30)).unwrap();
        assert_eq!(clipped.color(), Color::rgb(0, 0, 255));
        assert_eq!(clipped.thickness(), 3);
        assert_eq!(clipped.fill(), Some(&FillRule::SolidColor(Color::WHITE)));

        let mut vertices = clipped.vertices().to_vec();
        let mut expected = square(10, 20);
        vertices.sort();
        expected.sort();
        assert_eq!(vertices, expected);
    }

    #[test]
    fn clipping_disjoint_polygons() {
        let subject = Polygon::new(square(0, 10), Color::BLACK, 1);
        assert!(subject.clip_with(&square(20, 30)).is_none());
    }

    #[test]
    fn moving_every_vertex() {
        let mut polygon = Polygon::new(square(0, 10), Color::BLACK, 1);
        polygon.translate(5, -5);
        let moved: Vec<Point> = square(0, 10).iter().map(|p| p.translate(5, -5)).collect();
        assert_eq!(polygon.control_points().as_slice(), moved.as_slice());
    }
}
