// MIT/Apache2 License

use super::Surface;
use crate::{Color, FillAlgorithm, FillRule, Intensity};
use easel_geometry::{Bounds, Point};

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }
    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        (**self).pixel(x, y)
    }
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        (**self).set_pixel(x, y, color)
    }
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        (**self).in_bounds(x, y)
    }
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: Intensity) {
        (**self).blend_pixel(x, y, color, coverage)
    }
    #[inline]
    fn fill_span(&mut self, y: i32, x1: i32, x2: i32, color: Color) {
        (**self).fill_span(y, x1, x2, color)
    }
    #[inline]
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        (**self).draw_line(from, to, color)
    }
    #[inline]
    fn draw_line_aa(&mut self, from: Point, to: Point, color: Color) {
        (**self).draw_line_aa(from, to, color)
    }
    #[inline]
    fn draw_thick_line(&mut self, from: Point, to: Point, color: Color, thickness: u32) {
        (**self).draw_thick_line(from, to, color, thickness)
    }
    #[inline]
    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        (**self).draw_circle(center, radius, color)
    }
    #[inline]
    fn draw_circle_aa(&mut self, center: Point, radius: i32, color: Color) {
        (**self).draw_circle_aa(center, radius, color)
    }
    #[inline]
    fn fill_polygon(&mut self, vertices: &[Point], fill: &FillRule, algorithm: FillAlgorithm) {
        (**self).fill_polygon(vertices, fill, algorithm)
    }
    #[inline]
    fn fill_rectangle(&mut self, bounds: Bounds, fill: &FillRule) {
        (**self).fill_rectangle(bounds, fill)
    }
    #[inline]
    fn flood_fill(&mut self, seed: Point, fill: Color, boundary: Color) {
        (**self).flood_fill(seed, fill, boundary)
    }
}
