// BSL 1.0 License

//! Predicates over closed polygons given as vertex slices. The last vertex always connects back to the
//! first one, and the order of the vertices is the winding order.

use super::{Bounds, Point, Segment};
use alloc::vec::Vec;

/// The distance under which two consecutive vertices are considered duplicates.
pub const DEFAULT_SIMPLIFY_THRESHOLD: f32 = 2.0;

/// Iterate over the edges of a closed polygon, including the closing edge.
#[inline]
pub fn segments(vertices: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment::from_points(vertices[i], vertices[(i + 1) % n]))
}

/// Remove vertices that are within `threshold` pixels of the previously kept vertex.
///
/// If the last kept vertex ends up within the threshold of the first one, it is dropped as well. If
/// simplification would leave fewer than three vertices, the original vertices are returned unchanged.
#[must_use]
pub fn simplify(vertices: &[Point], threshold: f32) -> Vec<Point> {
    if vertices.len() < 3 {
        return vertices.to_vec();
    }

    let threshold_squared = threshold * threshold;
    let mut kept: Vec<Point> = Vec::with_capacity(vertices.len());
    kept.push(vertices[0]);

    for &current in &vertices[1..] {
        let last = kept[kept.len() - 1];
        if last.distance_squared_to(current) as f32 > threshold_squared {
            kept.push(current);
        }
    }

    if kept.len() > 2 {
        let last = kept[kept.len() - 1];
        if (last.distance_squared_to(kept[0]) as f32) < threshold_squared {
            kept.pop();
        }
    }

    if kept.len() < 3 {
        vertices.to_vec()
    } else {
        kept
    }
}

/// Twice the signed area of the polygon, computed with the shoelace formula.
#[must_use]
pub fn signed_area2(vertices: &[Point]) -> i64 {
    segments(vertices)
        .map(|s| i64::from(s.x1) * i64::from(s.y2) - i64::from(s.x2) * i64::from(s.y1))
        .sum()
}

/// The unsigned area enclosed by the polygon.
#[must_use]
pub fn area(vertices: &[Point]) -> f32 {
    signed_area2(vertices).abs() as f32 / 2.0
}

/// The smallest box containing every vertex, or `None` for an empty slice.
#[must_use]
pub fn bounds(vertices: &[Point]) -> Option<Bounds> {
    if vertices.is_empty() {
        None
    } else {
        Some(Bounds::from_points(
            vertices.iter().map(|&p| euclid::default::Point2D::from(p)),
        ))
    }
}

/// Tell if the polygon is convex.
///
/// The polygon is simplified with the default threshold first. A triangle is convex if it encloses any
/// area at all. Otherwise, every turn between consecutive edges has to go the same way; straight turns are
/// ignored. Fewer than three vertices are never convex.
#[must_use]
pub fn is_convex(vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let vertices = simplify(vertices, DEFAULT_SIMPLIFY_THRESHOLD);
    let n = vertices.len();

    if n == 3 {
        return signed_area2(&vertices) != 0;
    }

    let mut sign = 0;
    for i in 0..n {
        let (a, b, c) = (vertices[i], vertices[(i + 1) % n], vertices[(i + 2) % n]);
        let (dx1, dy1) = (i64::from(b.x - a.x), i64::from(b.y - a.y));
        let (dx2, dy2) = (i64::from(c.x - b.x), i64::from(c.y - b.y));
        let cross = (dx1 * dy2 - dy1 * dx2).signum();

        if cross == 0 {
            continue;
        }
        if sign == 0 {
            sign = cross;
        } else if sign != cross {
            return false;
        }
    }

    true
}

/// Tell if no two non-adjacent edges of the polygon intersect.
#[must_use]
pub fn is_simple(vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let edges: Vec<Segment> = segments(vertices).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            // edges sharing a vertex always touch
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if !adjacent && edges[i].intersects(edges[j]) {
                return false;
            }
        }
    }

    true
}

/// Tell if the point lies inside the polygon, using the even-odd rule.
///
/// Points on a vertex or on an edge count as inside.
#[must_use]
pub fn contains_point(vertices: &[Point], point: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    if segments(vertices).any(|edge| edge.contains_point(point)) {
        return true;
    }

    // cast a ray to the right and count the edges it crosses
    let crossings = segments(vertices)
        .filter(|edge| (edge.y1 > point.y) != (edge.y2 > point.y))
        .filter(|edge| {
            let slope = (edge.x2 - edge.x1) as f32 / (edge.y2 - edge.y1) as f32;
            let x = edge.x1 as f32 + slope * (point.y - edge.y1) as f32;
            x > point.x as f32
        })
        .count();

    crossings % 2 == 1
}

/// A non-horizontal polygon edge, oriented so that it runs from its smaller Y to its larger Y.
///
/// This is the unit the scanline fills work with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    /// The smaller Y coordinate of the edge.
    pub y_min: i32,
    /// The larger Y coordinate of the edge.
    pub y_max: i32,
    /// The X coordinate at `y_min`.
    pub x_at_y_min: i32,
    /// The X coordinate at `y_max`.
    pub x_at_y_max: i32,
    /// The change in X for every step in Y.
    pub inverse_slope: f32,
}

impl Edge {
    /// Create an edge from two points. Horizontal edges produce no crossings and return `None`.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Option<Edge> {
        if p1.y == p2.y {
            return None;
        }

        let (lower, upper) = if p1.y < p2.y { (p1, p2) } else { (p2, p1) };
        Some(Edge {
            y_min: lower.y,
            y_max: upper.y,
            x_at_y_min: lower.x,
            x_at_y_max: upper.x,
            inverse_slope: (upper.x - lower.x) as f32 / (upper.y - lower.y) as f32,
        })
    }

    /// The X coordinate at which this edge crosses the scanline `y`, in integer arithmetic.
    #[must_use]
    pub fn crossing_x(&self, y: i32) -> i32 {
        let dy = i64::from(self.y_max) - i64::from(self.y_min);
        let dx = i64::from(self.x_at_y_max) - i64::from(self.x_at_y_min);
        let offset = (i64::from(y) - i64::from(self.y_min)) * dx / dy;
        (i64::from(self.x_at_y_min) + offset) as i32
    }
}

/// The non-horizontal edges of a closed polygon.
#[inline]
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    segments(vertices).filter_map(|s| Edge::new(s.point1(), s.point2()))
}
