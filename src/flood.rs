// MIT/Apache2 License

//! Boundary flood fill.

use crate::{Color, Surface};
use easel_geometry::Point;

/// A horizontal run of pixels that has already been painted, but whose neighbors have not been looked at.
#[derive(Debug, Copy, Clone)]
struct Span {
    y: i32,
    x1: i32,
    x2: i32,
}

/// Flood the 4-connected region around `seed` with `fill`.
///
/// The region is bounded by pixels of the `boundary` color and by the edges of the surface; any other color
/// is painted over. Nothing happens if the seed lies outside the surface or already has the boundary or fill
/// color.
///
/// This is the span-based variant: whole horizontal runs are painted and pushed at once, then the rows
/// above and below each run are scanned for new runs.
pub fn flood_fill<S: Surface + ?Sized>(s: &mut S, seed: Point, fill: Color, boundary: Color) {
    let target = match s.pixel(seed.x, seed.y) {
        Some(target) => target,
        None => return,
    };
    if target == boundary || target == fill {
        return;
    }
    log::debug!("flood fill seeded at {:?}", seed);

    let fillable = |s: &S, x: i32, y: i32| {
        s.pixel(x, y)
            .map_or(false, |color| color != boundary && color != fill)
    };

    // paint the run starting at (x, y), extending it to the left and right
    let paint_run = |s: &mut S, x: i32, y: i32| -> Span {
        let mut x1 = x;
        while fillable(&*s, x1 - 1, y) {
            x1 -= 1;
        }
        let mut x2 = x;
        while fillable(&*s, x2 + 1, y) {
            x2 += 1;
        }
        s.fill_span(y, x1, x2, fill);
        Span { y, x1, x2 }
    };

    let mut stack = vec![paint_run(&mut *s, seed.x, seed.y)];
    let mut painted = 0usize;

    while let Some(span) = stack.pop() {
        painted += (span.x2 - span.x1 + 1) as usize;

        for y in [span.y - 1, span.y + 1] {
            let mut x = span.x1;
            while x <= span.x2 {
                if fillable(&*s, x, y) {
                    let run = paint_run(&mut *s, x, y);
                    x = run.x2 + 1;
                    stack.push(run);
                } else {
                    x += 1;
                }
            }
        }
    }

    log::trace!("flood fill painted {} pixels", painted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelBuffer;

    fn ring(buffer: &mut PixelBuffer, center: Point, radius: i32) {
        buffer.draw_circle(center, radius, Color::BLACK);
    }

    #[test]
    fn stays_inside_a_ring() {
        let mut buffer = PixelBuffer::filled(40, 40, Color::WHITE);
        let center = Point::new(20, 20);
        ring(&mut buffer, center, 10);
        let red = Color::rgb(255, 0, 0);

        buffer.flood_fill(center, red, Color::BLACK);

        let filled = buffer.points_with(red);
        assert!(!filled.is_empty());
        for p in &filled {
            assert!(p.distance_squared_to(center) < 100, "{:?} leaked out", p);
        }
        // the ring itself is untouched
        assert_eq!(buffer.pixel(30, 20), Some(Color::BLACK));
        assert_eq!(buffer.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn fills_a_box_exactly() {
        let mut buffer = PixelBuffer::filled(12, 12, Color::WHITE);
        for i in 0..=10 {
            buffer.set_pixel(i, 0, Color::BLACK);
            buffer.set_pixel(i, 10, Color::BLACK);
            buffer.set_pixel(0, i, Color::BLACK);
            buffer.set_pixel(10, i, Color::BLACK);
        }
        let blue = Color::rgb(0, 0, 255);
        buffer.flood_fill(Point::new(5, 5), blue, Color::BLACK);
        assert_eq!(buffer.count(blue), 9 * 9);
    }

    #[test]
    fn reaches_around_obstacles() {
        let mut buffer = PixelBuffer::filled(10, 10, Color::WHITE);
        // a wall with a gap at the bottom
        for y in 0..9 {
            buffer.set_pixel(5, y, Color::BLACK);
        }
        let green = Color::rgb(0, 255, 0);
        buffer.flood_fill(Point::new(1, 1), green, Color::BLACK);
        assert_eq!(buffer.pixel(8, 1), Some(green));
        assert_eq!(buffer.count(green), 100 - 9);
    }

    #[test]
    fn paints_over_other_colors() {
        let mut buffer = PixelBuffer::filled(5, 5, Color::WHITE);
        buffer.set_pixel(2, 2, Color::rgb(9, 9, 9));
        buffer.flood_fill(Point::new(0, 0), Color::rgb(1, 2, 3), Color::BLACK);
        assert_eq!(buffer.count(Color::rgb(1, 2, 3)), 25);
    }

    #[test]
    fn seeds_that_do_nothing() {
        let mut buffer = PixelBuffer::filled(5, 5, Color::WHITE);
        buffer.set_pixel(2, 2, Color::BLACK);
        let snapshot = buffer.clone();

        buffer.flood_fill(Point::new(2, 2), Color::WHITE, Color::BLACK);
        buffer.flood_fill(Point::new(0, 0), Color::WHITE, Color::BLACK);
        buffer.flood_fill(Point::new(-1, 9), Color::rgb(1, 1, 1), Color::BLACK);
        assert_eq!(buffer, snapshot);
    }
}
