// MIT/Apache2 License

use crate::{Color, Intensity, Surface};
use easel_geometry::Point;
use tinyvec::ArrayVec;

/// The eight reflections of an octant offset, without duplicates.
#[inline]
fn octants(x: i32, y: i32) -> ArrayVec<[(i32, i32); 8]> {
    let mut offsets = ArrayVec::new();
    for offset in [
        (x, y),
        (y, x),
        (-y, x),
        (-x, y),
        (-x, -y),
        (-y, -x),
        (y, -x),
        (x, -y),
    ] {
        if !offsets.contains(&offset) {
            offsets.push(offset);
        }
    }
    offsets
}

/// The pixels of the midpoint circle around `center`.
///
/// Only one octant is walked; the other seven are reflections of it. A radius of zero or less produces just
/// the center.
#[inline]
pub fn circle_points(center: Point, radius: i32) -> Vec<Point> {
    if radius <= 0 {
        return vec![center];
    }

    let mut points = Vec::with_capacity(radius as usize * 8);
    let (mut x, mut y, mut err) = (radius, 0, 0);

    while x >= y {
        points.extend(
            octants(x, y)
                .into_iter()
                .map(|(dx, dy)| Point::new(center.x + dx, center.y + dy)),
        );

        if err <= 0 {
            y += 1;
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }

    points
}

/// Draw the outline of a circle with the midpoint algorithm.
#[inline]
pub fn draw_circle<S: Surface + ?Sized>(s: &mut S, center: Point, radius: i32, color: Color) {
    circle_points(center, radius)
        .into_iter()
        .for_each(|p| s.set_pixel(p.x, p.y, color));
}

/// Draw an antialiased circle.
///
/// For every column of the first octant, the two pixels around the ideal arc are blended by how far their
/// centers are from the true radius: `1 - |distance - radius|`.
#[inline]
pub fn draw_circle_aa<S: Surface + ?Sized>(s: &mut S, center: Point, radius: i32, color: Color) {
    if radius <= 0 {
        s.blend_pixel(center.x, center.y, color, Intensity::one());
        return;
    }

    let r = radius as f32;
    let limit = (r / std::f32::consts::SQRT_2).ceil() as i32;

    for x in 0..=limit {
        let y = (r * r - (x * x) as f32).max(0.0).sqrt();
        let y_floor = y.floor() as i32;

        for candidate in [y_floor, y_floor + 1] {
            let distance = ((x * x + candidate * candidate) as f32).sqrt();
            let coverage = Intensity::clamped(1.0 - (distance - r).abs());

            for (dx, dy) in octants(x, candidate) {
                s.blend_pixel(center.x + dx, center.y + dy, color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelBuffer;
    use std::collections::BTreeSet;

    fn offsets(radius: i32) -> BTreeSet<(i32, i32)> {
        circle_points(Point::new(0, 0), radius)
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn symmetric_under_octant_reflections() {
        for radius in 1..20 {
            let pts = offsets(radius);
            for &(x, y) in &pts {
                for reflected in [(y, x), (-x, y), (x, -y), (-x, -y), (-y, -x)] {
                    assert!(pts.contains(&reflected), "r = {}: {:?} not mirrored", radius, reflected);
                }
            }
        }
    }

    #[test]
    fn never_leaves_the_radius() {
        for radius in 1..30 {
            for (x, y) in offsets(radius) {
                let distance = ((x * x + y * y) as f32).sqrt();
                assert!(distance <= radius as f32 + 1e-3, "r = {}: ({}, {})", radius, x, y);
                assert!(radius as f32 - distance < 1.5, "r = {}: ({}, {})", radius, x, y);
            }
        }
    }

    #[test]
    fn axis_points_are_hit() {
        let pts = offsets(7);
        for p in [(7, 0), (0, 7), (-7, 0), (0, -7)] {
            assert!(pts.contains(&p));
        }
    }

    #[test]
    fn zero_radius_is_the_center() {
        let center = Point::new(3, 3);
        assert_eq!(circle_points(center, 0), vec![center]);

        let mut buffer = PixelBuffer::new(7, 7);
        buffer.draw_circle(center, 0, Color::BLACK);
        assert_eq!(buffer.points_with(Color::BLACK), vec![center]);

        let mut buffer = PixelBuffer::new(7, 7);
        buffer.draw_circle_aa(center, 0, Color::BLACK);
        assert_eq!(buffer.points_with(Color::BLACK), vec![center]);
    }

    #[test]
    fn antialiased_circle_hits_axes() {
        let mut buffer = PixelBuffer::filled(21, 21, Color::WHITE);
        let center = Point::new(10, 10);
        buffer.draw_circle_aa(center, 8, Color::BLACK);
        for (x, y) in [(18, 10), (2, 10), (10, 18), (10, 2)] {
            assert_eq!(buffer.pixel(x, y), Some(Color::BLACK));
        }
        assert_eq!(buffer.pixel(10, 10), Some(Color::WHITE));
    }
}
