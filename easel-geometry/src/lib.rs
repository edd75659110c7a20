// BSL 1.0 License

//! Geometry primitives used by the `easel` rasterizer. Everything here is built around 32-bit integers,
//! which represent pixels. The X axis runs from left to right and the Y axis runs from top to bottom, so
//! "clockwise" and "counterclockwise" below are named after the sign of the orientation determinant rather
//! than how the shape looks on screen.
//!
//! Nothing in this crate touches pixels; the fills and clippers in `easel` build on these predicates.

#![no_std]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod clip;
pub use clip::*;

mod polygon;
pub use polygon::*;

pub(crate) mod util;

use core::{cmp, ops};

/// An axis-aligned bounding box, with both corners inclusive.
pub type Bounds = euclid::default::Box2D<i32>;

/// A point in two-dimensional pixel space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Get the distance from this point to another point.
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Point) -> f32 {
        util::sqrt(self.distance_squared_to(other) as f32)
    }

    /// Get the squared distance from this point to another point. This never leaves integer space.
    #[inline]
    #[must_use]
    pub fn distance_squared_to(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Tell if this point lies within `radius` pixels of another point.
    #[inline]
    #[must_use]
    pub fn is_near(self, other: Point, radius: i32) -> bool {
        self.distance_squared_to(other) <= i64::from(radius) * i64::from(radius)
    }

    /// Move this point by the given offsets.
    #[inline]
    #[must_use]
    pub fn translate(self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl ops::Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl ops::Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Point {
        Point { x, y }
    }
}

impl From<Point> for euclid::default::Point2D<i32> {
    #[inline]
    fn from(p: Point) -> Self {
        euclid::point2(p.x, p.y)
    }
}

/// A straight line segment between two points in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    /// X coordinate of the first point.
    pub x1: i32,
    /// Y coordinate of the first point.
    pub y1: i32,
    /// X coordinate of the second point.
    pub x2: i32,
    /// Y coordinate of the second point.
    pub y2: i32,
}

impl Segment {
    /// The first point on this segment, represented by the `x1` and `y1` fields.
    #[inline]
    #[must_use]
    pub fn point1(self) -> Point {
        Point {
            x: self.x1,
            y: self.y1,
        }
    }

    /// The second point on this segment, represented by the `x2` and `y2` fields.
    #[inline]
    #[must_use]
    pub fn point2(self) -> Point {
        Point {
            x: self.x2,
            y: self.y2,
        }
    }

    /// Create a segment from two points.
    #[inline]
    #[must_use]
    pub fn from_points(p1: Point, p2: Point) -> Segment {
        Segment {
            x1: p1.x,
            y1: p1.y,
            x2: p2.x,
            y2: p2.y,
        }
    }

    /// Is this segment a single point?
    #[inline]
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    /// Is this segment parallel to the X axis?
    #[inline]
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.y1 == self.y2
    }

    /// The length of this segment.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.point1().distance_to(self.point2())
    }

    /// Tell if the point lies within the bounding box of this segment.
    #[inline]
    fn bounding_box_contains(self, point: Point) -> bool {
        point.x <= cmp::max(self.x1, self.x2)
            && point.x >= cmp::min(self.x1, self.x2)
            && point.y <= cmp::max(self.y1, self.y2)
            && point.y >= cmp::min(self.y1, self.y2)
    }

    /// Tell if the point lies exactly on this segment.
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Point) -> bool {
        Orientation::of(self.point1(), self.point2(), point) == Orientation::Collinear
            && self.bounding_box_contains(point)
    }

    /// Tell if two segments intersect, including touching endpoints and collinear overlap.
    #[inline]
    #[must_use]
    pub fn intersects(self, other: Segment) -> bool {
        let (p1, q1) = (self.point1(), self.point2());
        let (p2, q2) = (other.point1(), other.point2());

        let o1 = Orientation::of(p1, q1, p2);
        let o2 = Orientation::of(p1, q1, q2);
        let o3 = Orientation::of(p2, q2, p1);
        let o4 = Orientation::of(p2, q2, q1);

        (o1 != o2 && o3 != o4)
            || (o1 == Orientation::Collinear && self.bounding_box_contains(p2))
            || (o2 == Orientation::Collinear && self.bounding_box_contains(q2))
            || (o3 == Orientation::Collinear && other.bounding_box_contains(p1))
            || (o4 == Orientation::Collinear && other.bounding_box_contains(q1))
    }

    /// The shortest distance between a point and this segment.
    ///
    /// The point is projected onto the segment and the projection is clamped to the segment's ends, so
    /// points past either end measure their distance to that end.
    #[must_use]
    pub fn distance_to_point(self, point: Point) -> f32 {
        let dx = (self.x2 - self.x1) as f32;
        let dy = (self.y2 - self.y1) as f32;
        let length_squared = dx * dx + dy * dy;
        if length_squared == 0.0 {
            return point.distance_to(self.point1());
        }

        let t = ((point.x - self.x1) as f32 * dx + (point.y - self.y1) as f32 * dy) / length_squared;
        let t = t.max(0.0).min(1.0);

        let nearest_x = self.x1 as f32 + dx * t;
        let nearest_y = self.y1 as f32 + dy * t;
        let ex = point.x as f32 - nearest_x;
        let ey = point.y as f32 - nearest_y;
        util::sqrt(ex * ex + ey * ey)
    }
}

/// Convert an iterator over a series of points into an iterator over a series of segments connecting those
/// points.
#[inline]
pub fn polyline<I: IntoIterator<Item = Point>>(points: I) -> impl Iterator<Item = Segment> {
    points
        .into_iter()
        .scan(None, |last_point, current_point| {
            // returns Some(None) if this is the first point, and Some(Some(segment)) for any other point
            Some(
                last_point
                    .replace(current_point)
                    .map(move |last_point| Segment::from_points(last_point, current_point)),
            )
        })
        .flatten()
}

/// The rotational sense of three points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// The orientation determinant is positive.
    Clockwise,
    /// The orientation determinant is negative.
    Counterclockwise,
}

impl Orientation {
    /// Get the orientation of the triple (`p`, `q`, `r`).
    #[inline]
    #[must_use]
    pub fn of(p: Point, q: Point, r: Point) -> Orientation {
        let value = (i64::from(q.y) - i64::from(p.y)) * (i64::from(r.x) - i64::from(q.x))
            - (i64::from(q.x) - i64::from(p.x)) * (i64::from(r.y) - i64::from(q.y));
        match value.cmp(&0) {
            cmp::Ordering::Equal => Orientation::Collinear,
            cmp::Ordering::Greater => Orientation::Clockwise,
            cmp::Ordering::Less => Orientation::Counterclockwise,
        }
    }
}
