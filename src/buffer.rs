// MIT/Apache2 License

use crate::{Color, Surface};
use easel_geometry::Point;

/// An in-memory grid of pixels, stored row by row.
///
/// This is the surface that everything gets rendered onto. Writes outside of the buffer are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer where every pixel is transparent.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Create a new buffer where every pixel has the given color.
    #[inline]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// All of the pixels, row by row.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Set every pixel to `color`.
    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
    }

    /// Iterate over every pixel along with its position.
    #[inline]
    pub fn points(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels.iter().enumerate().map(move |(i, &color)| {
            (Point::new((i % width) as i32, (i / width) as i32), color)
        })
    }

    /// The positions of every pixel that has exactly the given color.
    #[inline]
    pub fn points_with(&self, color: Color) -> Vec<Point> {
        self.points()
            .filter(|&(_, c)| c == color)
            .map(|(p, _)| p)
            .collect()
    }

    /// Count the pixels that have exactly the given color.
    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl Surface for PixelBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    #[inline]
    fn fill_span(&mut self, y: i32, x1: i32, x2: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let x1 = x1.max(0);
        let x2 = x2.min(self.width as i32 - 1);
        if x1 > x2 {
            return;
        }

        let row = y as usize * self.width as usize;
        self.pixels[row + x1 as usize..=row + x2 as usize]
            .iter_mut()
            .for_each(|pixel| *pixel = color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buffer = PixelBuffer::new(4, 3);
        buffer.set_pixel(-1, 0, Color::BLACK);
        buffer.set_pixel(4, 0, Color::BLACK);
        buffer.set_pixel(0, 3, Color::BLACK);
        buffer.set_pixel(0, -7, Color::BLACK);
        assert_eq!(buffer.count(Color::TRANSPARENT), 12);
        assert_eq!(buffer.pixel(4, 0), None);

        buffer.set_pixel(3, 2, Color::BLACK);
        assert_eq!(buffer.pixel(3, 2), Some(Color::BLACK));
        assert_eq!(buffer.points_with(Color::BLACK), vec![Point::new(3, 2)]);
    }

    #[test]
    fn spans_are_clamped() {
        let mut buffer = PixelBuffer::new(5, 2);
        buffer.fill_span(1, 3, -4, Color::WHITE);
        assert_eq!(buffer.count(Color::WHITE), 4);
        buffer.fill_span(1, 10, 20, Color::BLACK);
        buffer.fill_span(2, 0, 4, Color::BLACK);
        assert_eq!(buffer.count(Color::BLACK), 0);
        buffer.fill_span(0, 2, 100, Color::BLACK);
        assert_eq!(
            buffer.points_with(Color::BLACK),
            vec![Point::new(2, 0), Point::new(3, 0), Point::new(4, 0)]
        );
    }

    #[test]
    fn clearing() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.clear(Color::WHITE);
        assert_eq!(buffer.count(Color::WHITE), 4);
    }
}
