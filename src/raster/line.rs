// MIT/Apache2 License

use crate::{Color, Intensity, Surface};
use easel_geometry::Point;
use std::mem;

/// The pixels of the midpoint line between `from` and `to`, both endpoints included.
///
/// Only integer arithmetic is used. The line is always walked from left to right along its major axis, so
/// swapping the endpoints produces the same pixels.
#[inline]
pub fn line_points(from: Point, to: Point) -> Vec<Point> {
    // straight runs don't need an error term
    if from.y == to.y {
        let (x1, x2) = (from.x.min(to.x), from.x.max(to.x));
        return (x1..=x2).map(|x| Point::new(x, from.y)).collect();
    }
    if from.x == to.x {
        let (y1, y2) = (from.y.min(to.y), from.y.max(to.y));
        return (y1..=y2).map(|y| Point::new(from.x, y)).collect();
    }

    let (mut x0, mut y0, mut x1, mut y1) = (from.x, from.y, to.x, to.y);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        mem::swap(&mut x0, &mut y0);
        mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        mem::swap(&mut x0, &mut x1);
        mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let y_step = if y0 < y1 { 1 } else { -1 };

    let mut d = 2 * dy - dx;
    let mut y = y0;
    let mut points = Vec::with_capacity(dx as usize + 1);

    for x in x0..=x1 {
        points.push(if steep { Point::new(y, x) } else { Point::new(x, y) });

        if d > 0 {
            y += y_step;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }

    points
}

/// Draw a one pixel wide line with the midpoint algorithm.
#[inline]
pub fn draw_line<S: Surface + ?Sized>(s: &mut S, from: Point, to: Point, color: Color) {
    line_points(from, to)
        .into_iter()
        .for_each(|p| s.set_pixel(p.x, p.y, color));
}

#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

/// Draw an antialiased line with Xiaolin Wu's algorithm.
///
/// Every column of the line is shared between the two pixels straddling the ideal line, each blended in
/// proportion to how close the line passes. The endpoint columns are weighted down by half.
#[inline]
pub fn draw_line_aa<S: Surface + ?Sized>(s: &mut S, from: Point, to: Point, color: Color) {
    let (mut x0, mut y0, mut x1, mut y1) = (from.x, from.y, to.x, to.y);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        mem::swap(&mut x0, &mut y0);
        mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        mem::swap(&mut x0, &mut x1);
        mem::swap(&mut y0, &mut y1);
    }

    let mut plot = |x: i32, y: i32, coverage: f32| {
        let coverage = Intensity::clamped(coverage);
        if steep {
            s.blend_pixel(y, x, color, coverage);
        } else {
            s.blend_pixel(x, y, color, coverage);
        }
    };

    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    // endpoints sit on pixel centers, so their horizontal gap is always one half
    let x_gap = rfpart(x0 as f32 + 0.5);
    let y_end = y0 as f32;
    plot(x0, y_end.floor() as i32, rfpart(y_end) * x_gap);
    plot(x0, y_end.floor() as i32 + 1, fpart(y_end) * x_gap);

    let x_gap = fpart(x1 as f32 + 0.5);
    let y_end = y1 as f32;
    plot(x1, y_end.floor() as i32, rfpart(y_end) * x_gap);
    plot(x1, y_end.floor() as i32 + 1, fpart(y_end) * x_gap);

    let mut inter_y = y0 as f32 + gradient;
    for x in (x0 + 1)..x1 {
        plot(x, inter_y.floor() as i32, rfpart(inter_y));
        plot(x, inter_y.floor() as i32 + 1, fpart(inter_y));
        inter_y += gradient;
    }
}
