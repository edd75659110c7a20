// MIT/Apache2 License

use super::line_points;
use crate::{Color, Surface};
use easel_geometry::Point;

/// A round brush, stored as the offsets from its center that it paints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrushMask {
    size: u32,
    offsets: Vec<(i32, i32)>,
}

impl BrushMask {
    /// Create a circular brush that is `thickness` pixels across.
    ///
    /// Even thicknesses are rounded up to the next odd number so the brush has a center pixel. A thickness of
    /// zero is treated as one.
    #[inline]
    pub fn circular(thickness: u32) -> Self {
        let size = thickness.max(1) | 1;
        let radius = (size / 2) as i32;
        let radius_squared = radius * radius;

        let offsets = (-radius..=radius)
            .flat_map(|dy| (-radius..=radius).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx * dx + dy * dy <= radius_squared)
            .collect();

        Self { size, offsets }
    }

    /// The width and height of the mask.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Tell if the brush paints the given offset from its center.
    #[inline]
    pub fn covers(&self, dx: i32, dy: i32) -> bool {
        self.offsets.contains(&(dx, dy))
    }

    /// Paint the brush centered on `center`.
    #[inline]
    pub fn stamp<S: Surface + ?Sized>(&self, s: &mut S, center: Point, color: Color) {
        for &(dx, dy) in &self.offsets {
            s.set_pixel(center.x + dx, center.y + dy, color);
        }
    }
}

/// Draw a line by stamping a round brush at every pixel of its midpoint center line.
#[inline]
pub fn draw_thick_line<S: Surface + ?Sized>(
    s: &mut S,
    from: Point,
    to: Point,
    color: Color,
    thickness: u32,
) {
    let brush = BrushMask::circular(thickness);
    log::trace!(
        "stamping a {}px brush from {:?} to {:?}",
        brush.size(),
        from,
        to
    );

    for center in line_points(from, to) {
        brush.stamp(s, center, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelBuffer;

    #[test]
    fn even_sizes_round_up() {
        assert_eq!(BrushMask::circular(0).size(), 1);
        assert_eq!(BrushMask::circular(1).size(), 1);
        assert_eq!(BrushMask::circular(4).size(), 5);
        assert_eq!(BrushMask::circular(5).size(), 5);
    }

    #[test]
    fn mask_is_round() {
        let brush = BrushMask::circular(5);
        assert!(brush.covers(0, 0));
        assert!(brush.covers(2, 0));
        assert!(brush.covers(0, -2));
        assert!(brush.covers(1, 1));
        assert!(!brush.covers(2, 2));
        assert!(!brush.covers(3, 0));
    }

    #[test]
    fn thick_horizontal_line() {
        let mut buffer = PixelBuffer::new(20, 20);
        buffer.draw_thick_line(Point::new(5, 10), Point::new(14, 10), Color::BLACK, 3);
        // a radius one brush covers a plus sign, so the stroke is three rows tall
        for x in 5..=14 {
            for y in 9..=11 {
                assert_eq!(buffer.pixel(x, y), Some(Color::BLACK));
            }
        }
        assert_eq!(buffer.pixel(4, 10), Some(Color::BLACK));
        assert_eq!(buffer.pixel(4, 9), Some(Color::TRANSPARENT));
        assert_eq!(buffer.pixel(10, 12), Some(Color::TRANSPARENT));
    }

    #[test]
    fn thickness_one_matches_plain_line() {
        let (a, b) = (Point::new(1, 2), Point::new(17, 9));
        let mut thick = PixelBuffer::new(20, 20);
        thick.draw_thick_line(a, b, Color::BLACK, 1);
        let mut plain = PixelBuffer::new(20, 20);
        plain.draw_line(a, b, Color::BLACK);
        assert_eq!(thick, plain);
    }
}
