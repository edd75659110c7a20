// MIT/Apache2 License

use crate::{flood, raster, scanline, Color, FillAlgorithm, FillRule, Intensity};
use easel_geometry::{Bounds, Point};

/// Default implementations of `Surface` functions.
mod defaults;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;
/// Provides the `RenderOptions` type.
mod options;

pub use options::RenderOptions;

/// Something that can be drawn upon; otherwise known as the whole point of this crate.
///
/// A `Surface` is a rectangular grid of pixels with its origin at the top left. Implementors only need to
/// provide its size and a way to read and write single pixels; every drawing operation has a default
/// implementation built on top of those. Implementors backed by contiguous memory may want to override
/// `fill_span`, since every fill funnels through it.
///
/// None of the drawing operations fail. Coordinates outside of the surface are silently dropped, and
/// degenerate shapes reduce to a well-defined handful of pixels.
pub trait Surface {
    /* Pixel Access */

    /// The number of columns in this surface.
    fn width(&self) -> u32;
    /// The number of rows in this surface.
    fn height(&self) -> u32;

    /// Get the color at the given pixel, or `None` if it lies outside the surface.
    fn pixel(&self, x: i32, y: i32) -> Option<Color>;
    /// Set the color of the given pixel. Out-of-bounds writes are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Tell if the given pixel lies within the surface.
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Composite `color` over the given pixel, with its opacity scaled by `coverage`.
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: Intensity) {
        defaults::blend_pixel(self, x, y, color, coverage)
    }

    /// Set every pixel from `x1` to `x2` on row `y`, inclusive.
    #[inline]
    fn fill_span(&mut self, y: i32, x1: i32, x2: i32, color: Color) {
        defaults::fill_span(self, y, x1, x2, color)
    }

    /* Outlines */

    /// Draw a one pixel wide line with the midpoint algorithm.
    #[inline]
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        raster::draw_line(self, from, to, color)
    }
    /// Draw an antialiased line with Xiaolin Wu's algorithm.
    #[inline]
    fn draw_line_aa(&mut self, from: Point, to: Point, color: Color) {
        raster::draw_line_aa(self, from, to, color)
    }
    /// Draw a line by stamping a round brush of the given thickness along it.
    #[inline]
    fn draw_thick_line(&mut self, from: Point, to: Point, color: Color, thickness: u32) {
        raster::draw_thick_line(self, from, to, color, thickness)
    }
    /// Draw the outline of a circle with the midpoint algorithm.
    #[inline]
    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        raster::draw_circle(self, center, radius, color)
    }
    /// Draw the outline of an antialiased circle.
    #[inline]
    fn draw_circle_aa(&mut self, center: Point, radius: i32, color: Color) {
        raster::draw_circle_aa(self, center, radius, color)
    }

    /* Fills */

    /// Fill in a polygon defined by its vertices. Fewer than three vertices draw nothing.
    #[inline]
    fn fill_polygon(&mut self, vertices: &[Point], fill: &FillRule, algorithm: FillAlgorithm) {
        match algorithm {
            FillAlgorithm::Parity => scanline::parity_fill(self, vertices, fill),
            FillAlgorithm::EdgeTable => scanline::edge_table_fill(self, vertices, fill),
        }
    }
    /// Fill in every pixel of a box, both corners inclusive. Textures are tiled at their natural size from
    /// the top left corner of the box.
    #[inline]
    fn fill_rectangle(&mut self, bounds: Bounds, fill: &FillRule) {
        defaults::fill_rectangle(self, bounds, fill)
    }
    /// Flood the region around `seed` with `fill`, stopping at pixels that have the `boundary` color.
    #[inline]
    fn flood_fill(&mut self, seed: Point, fill: Color, boundary: Color) {
        flood::flood_fill(self, seed, fill, boundary)
    }
}
