// BSL 1.0 License

//! Polygon clipping.

use super::{signed_area2, util, Point};
use alloc::vec::Vec;

/// Denominators smaller than this are treated as parallel lines.
pub const PARALLEL_EPSILON: f64 = 1e-4;

/// Clip `subject` against the convex polygon `clip` using the Sutherland-Hodgman algorithm.
///
/// The clip polygon may wind either way. Vertices lying exactly on a clip edge are kept. Returns an empty
/// polygon if either input has fewer than three vertices, or if nothing of `subject` lies inside `clip`.
#[must_use]
pub fn sutherland_hodgman(subject: &[Point], clip: &[Point]) -> Vec<Point> {
    if subject.len() < 3 || clip.len() < 3 {
        return Vec::new();
    }

    let mut clip = clip.to_vec();
    if signed_area2(&clip) > 0 {
        clip.reverse();
    }

    let mut output = subject.to_vec();
    for i in 0..clip.len() {
        let clip_start = clip[i];
        let clip_end = clip[(i + 1) % clip.len()];

        let input = core::mem::take(&mut output);
        let mut start = match input.last() {
            Some(&last) => last,
            None => break,
        };

        for &end in &input {
            let end_inside = is_inside(end, clip_start, clip_end);
            let start_inside = is_inside(start, clip_start, clip_end);

            if end_inside {
                if !start_inside {
                    output.push(intersection(start, end, clip_start, clip_end));
                }
                output.push(end);
            } else if start_inside {
                output.push(intersection(start, end, clip_start, clip_end));
            }

            start = end;
        }
    }

    output
}

/// Tell if `point` lies on the inner side of the directed clip edge, or on the edge itself.
fn is_inside(point: Point, clip_start: Point, clip_end: Point) -> bool {
    let cross = (i64::from(clip_end.x) - i64::from(clip_start.x))
        * (i64::from(point.y) - i64::from(clip_start.y))
        - (i64::from(clip_end.y) - i64::from(clip_start.y))
            * (i64::from(point.x) - i64::from(clip_start.x));
    cross <= 0
}

/// The point where the line through `p1` and `p2` meets the line through `p3` and `p4`, rounded to the
/// nearest pixel. Near-parallel lines yield the midpoint of `p1` and `p2`.
fn intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Point {
    let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));
    let (x2, y2) = (f64::from(p2.x), f64::from(p2.y));
    let (x3, y3) = (f64::from(p3.x), f64::from(p3.y));
    let (x4, y4) = (f64::from(p4.x), f64::from(p4.y));

    let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if util::approx_eq(denominator, 0.0, PARALLEL_EPSILON) {
        return Point::new((p1.x + p2.x) / 2, (p1.y + p2.y) / 2);
    }

    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denominator;
    Point::new(
        util::round(x1 + ua * (x2 - x1)) as i32,
        util::round(y1 + ua * (y2 - y1)) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area;
    use approx::assert_abs_diff_eq;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort();
        points
    }

    #[test]
    fn clipping_by_itself_is_identity() {
        let square = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let clipped = sutherland_hodgman(&square, &square);
        assert_eq!(sorted(clipped.clone()), sorted(square.clone()));
        assert_abs_diff_eq!(area(&clipped), area(&square));

        let mut reversed = square.clone();
        reversed.reverse();
        let clipped = sutherland_hodgman(&reversed, &reversed);
        assert_eq!(sorted(clipped), sorted(square));
    }

    #[test]
    fn clip_to_inner_square() {
        let outer = pts(&[(0, 0), (20, 0), (20, 20), (0, 20)]);
        let inner = pts(&[(5, 5), (15, 5), (15, 15), (5, 15)]);
        let clipped = sutherland_hodgman(&outer, &inner);
        assert_eq!(sorted(clipped.clone()), sorted(inner));
        assert_abs_diff_eq!(area(&clipped), 100.0);
    }

    #[test]
    fn clip_triangle_against_square() {
        let triangle = pts(&[(0, 0), (20, 0), (0, 20)]);
        let square = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let clipped = sutherland_hodgman(&triangle, &square);
        // the hypotenuse passes through the far corner of the square
        assert_abs_diff_eq!(area(&clipped), 100.0);
        assert!(clipped.iter().all(|p| (0..=10).contains(&p.x) && (0..=10).contains(&p.y)));
    }

    #[test]
    fn disjoint_polygons_clip_to_nothing() {
        let a = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let b = pts(&[(50, 50), (60, 50), (60, 60), (50, 60)]);
        assert!(sutherland_hodgman(&a, &b).is_empty());
    }

    #[test]
    fn degenerate_inputs() {
        let square = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let segment = pts(&[(0, 0), (10, 10)]);
        assert!(sutherland_hodgman(&segment, &square).is_empty());
        assert!(sutherland_hodgman(&square, &segment).is_empty());
    }
}
