// MIT/Apache2 License

use super::{ControlPoints, VERTEX_TOLERANCE};
use crate::{Color, RenderOptions, Surface};
use easel_geometry::{self as geometry, Point};
use tinyvec::tiny_vec;

/// The radius of the marker drawn at the start of a pill whose radius hasn't been chosen yet.
const MARKER_RADIUS: i32 = 5;

/// A freshly set radius seeds the pill's length at this many radii.
const INITIAL_LENGTH_FACTOR: i32 = 4;

/// How far along its construction a pill is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PillStage {
    /// The start point is placed; the next click chooses the radius.
    RadiusPending,
    /// The radius is chosen; the end point can still be dragged around. The next click finalizes.
    RadiusSet,
    /// The pill is complete.
    Finalized,
}

/// A capsule: a thick segment between two points with round caps of the same radius.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pill {
    start: Point,
    end: Point,
    radius: i32,
    color: Color,
    stage: PillStage,
}

impl Pill {
    /// Start a new pill at `start`. It has no length yet and waits for its radius.
    #[inline]
    pub fn new(start: Point, color: Color) -> Self {
        Self {
            start,
            end: start,
            radius: MARKER_RADIUS,
            color,
            stage: PillStage::RadiusPending,
        }
    }

    /// Create a pill that is already complete.
    #[inline]
    pub fn finalized(start: Point, end: Point, radius: i32, color: Color) -> Self {
        Self {
            start,
            end,
            radius: radius.max(0),
            color,
            stage: PillStage::Finalized,
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[inline]
    pub fn stage(&self) -> PillStage {
        self.stage
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The distance between the centers of the two caps.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance_to(self.end)
    }

    /// The unit vector from the start towards the end, or `+x` if the two coincide.
    #[inline]
    fn direction_towards(&self, point: Point) -> (f32, f32) {
        let (dx, dy) = ((point.x - self.start.x) as f32, (point.y - self.start.y) as f32);
        let length = self.start.distance_to(point);
        if length == 0.0 {
            (1.0, 0.0)
        } else {
            (dx / length, dy / length)
        }
    }

    #[inline]
    fn point_along(&self, (dir_x, dir_y): (f32, f32), length: f32) -> Point {
        self.start
            .translate((dir_x * length) as i32, (dir_y * length) as i32)
    }

    /// Choose the radius as the distance from the start to `point`.
    ///
    /// The end point is seeded along the same direction, a few radii away.
    pub fn set_radius_from(&mut self, point: Point) {
        self.radius = self.start.distance_to(point) as i32;
        let length = (self.radius * INITIAL_LENGTH_FACTOR) as f32;
        self.end = self.point_along(self.direction_towards(point), length);
        self.stage = PillStage::RadiusSet;

        log::debug!(
            "Pill radius set to {}, end seeded at ({}, {})",
            self.radius,
            self.end.x,
            self.end.y
        );
    }

    /// Move the end point.
    #[inline]
    pub fn set_end(&mut self, end: Point) {
        self.end = end;
    }

    /// Move the end point so that the pill is `length` long, keeping its direction.
    #[inline]
    pub fn set_length(&mut self, length: f32) {
        let direction = self.direction_towards(self.end);
        self.end = self.point_along(direction, length.max(0.0));
    }

    #[inline]
    pub fn finalize(&mut self) {
        self.stage = PillStage::Finalized;
    }

    /// Advance the construction by one click at `point` and return the new stage.
    pub fn advance(&mut self, point: Point) -> PillStage {
        match self.stage {
            PillStage::RadiusPending => self.set_radius_from(point),
            PillStage::RadiusSet => {
                self.finalize();
                log::debug!("Pill finalized");
            }
            PillStage::Finalized => {}
        }

        self.stage
    }

    #[inline]
    fn draw_cap_outline<S: Surface + ?Sized>(&self, s: &mut S, center: Point, options: &RenderOptions) {
        if options.antialiasing {
            s.draw_circle_aa(center, self.radius, self.color);
        } else {
            s.draw_circle(center, self.radius, self.color);
        }
    }

    /// Render the pill according to how far along its construction it is.
    pub fn render<S: Surface + ?Sized>(&self, s: &mut S, options: &RenderOptions) {
        match self.stage {
            PillStage::RadiusPending => s.draw_circle(self.start, MARKER_RADIUS, self.color),
            PillStage::RadiusSet => self.draw_cap_outline(s, self.start, options),
            PillStage::Finalized => {
                if self.length() < self.radius as f32 {
                    self.draw_cap_outline(s, self.start, options);
                    return;
                }

                let direction = self.direction_towards(self.end);
                self.fill_body(s, direction);
                fill_half_disc(s, self.start, self.radius, (-direction.0, -direction.1), self.color);
                fill_half_disc(s, self.end, self.radius, direction, self.color);
                self.draw_cap_outline(s, self.start, options);
                self.draw_cap_outline(s, self.end, options);
            }
        }
    }

    /// Fill the rectangle between the two cap centers.
    fn fill_body<S: Surface + ?Sized>(&self, s: &mut S, (dir_x, dir_y): (f32, f32)) {
        let radius = self.radius as f32;
        let (px, py) = ((-dir_y * radius) as i32, (dir_x * radius) as i32);

        let quad = [
            self.start.translate(px, py),
            self.end.translate(px, py),
            self.end.translate(-px, -py),
            self.start.translate(-px, -py),
        ];
        let bounds = match geometry::bounds(&quad) {
            Some(bounds) => bounds,
            None => return,
        };

        let top = bounds.min.y.max(0);
        let bottom = bounds.max.y.min(s.height() as i32 - 1);
        let left = bounds.min.x.max(0);
        let right = bounds.max.x.min(s.width() as i32 - 1);

        log::trace!("Filling pill body over rows {}..={}", top, bottom);

        for y in top..=bottom {
            for x in left..=right {
                if quad_contains(&quad, Point::new(x, y)) {
                    s.set_pixel(x, y, self.color);
                }
            }
        }
    }

    /// A point hits the pill if it is near either cap's outline, or beside the segment between the caps.
    pub fn contains(&self, point: Point) -> bool {
        let radius = self.radius as f32;
        if [self.start, self.end]
            .iter()
            .any(|center| (point.distance_to(*center) - radius).abs() <= VERTEX_TOLERANCE as f32)
        {
            return true;
        }

        let length = self.length();
        if length == 0.0 {
            return false;
        }

        let (dir_x, dir_y) = self.direction_towards(self.end);
        let (vx, vy) = ((point.x - self.start.x) as f32, (point.y - self.start.y) as f32);
        let along = vx * dir_x + vy * dir_y;
        if along < 0.0 || along > length {
            return false;
        }

        let across = (vx * -dir_y + vy * dir_x).abs();
        across <= (self.radius + VERTEX_TOLERANCE) as f32
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.translate(dx, dy);
        self.end = self.end.translate(dx, dy);
    }

    /// Both cap centers, and the point that shows the radius.
    #[inline]
    pub fn control_points(&self) -> ControlPoints {
        tiny_vec![self.start, self.end, self.start.translate(self.radius, 0)]
    }
}

/// Tell if `point` is inside the quadrilateral, edges included, whichever way it winds.
#[inline]
fn quad_contains(quad: &[Point; 4], point: Point) -> bool {
    let mut crosses = [0i64; 4];
    for (i, cross) in crosses.iter_mut().enumerate() {
        let (a, b) = (quad[i], quad[(i + 1) % 4]);
        let (ex, ey) = (i64::from(b.x - a.x), i64::from(b.y - a.y));
        let (px, py) = (i64::from(point.x - a.x), i64::from(point.y - a.y));
        *cross = ex * py - ey * px;
    }

    crosses.iter().all(|&c| c >= 0) || crosses.iter().all(|&c| c <= 0)
}

/// Fill the half of a disc that faces `direction`.
fn fill_half_disc<S: Surface + ?Sized>(
    s: &mut S,
    center: Point,
    radius: i32,
    (dir_x, dir_y): (f32, f32),
    color: Color,
) {
    let radius_squared = i64::from(radius) * i64::from(radius);

    let top = (center.y - radius).max(0);
    let bottom = (center.y + radius).min(s.height() as i32 - 1);
    let left = (center.x - radius).max(0);
    let right = (center.x + radius).min(s.width() as i32 - 1);

    for y in top..=bottom {
        for x in left..=right {
            if Point::new(x, y).distance_squared_to(center) > radius_squared {
                continue;
            }

            let (vx, vy) = ((x - center.x) as f32, (y - center.y) as f32);
            if vx * dir_x + vy * dir_y >= 0.0 {
                s.set_pixel(x, y, color);
            }
        }
    }
}
