// MIT/Apache2 License

//! The shapes that make up a drawing.
//!
//! Every shape knows how to render itself onto a [`Surface`], how to tell if a point is close enough to it
//! to count as a hit, and how to move. The closed set of variants is gathered in the [`Shape`] enum.

mod circle;
mod line;
mod pill;
mod polygon;
mod rectangle;

#[cfg(feature = "serde")]
mod record;

pub use circle::Circle;
pub use line::{Line, PenType};
pub use pill::{Pill, PillStage};
pub use polygon::Polygon;
pub use rectangle::{Rectangle, ResizeHandle};

#[cfg(feature = "serde")]
pub use record::{ColorRecord, PointRecord, ShapeRecord};

use crate::{Color, RenderOptions, Surface};
use easel_geometry::Point;
use tinyvec::TinyVec;

/// How close, in pixels, a point has to be to a vertex or an outline to hit it.
pub const VERTEX_TOLERANCE: i32 = 5;

/// The points a shape can be grabbed by. Most shapes have at most four.
pub type ControlPoints = TinyVec<[Point; 4]>;

/// Draw a closed outline through `vertices`, the way every outlined shape does it.
///
/// Antialiasing wins over thickness; otherwise thick outlines are stamped with a round brush.
#[inline]
pub(crate) fn draw_outline<S: Surface + ?Sized>(
    s: &mut S,
    vertices: &[Point],
    color: Color,
    thickness: u32,
    options: &RenderOptions,
) {
    let n = vertices.len();
    for i in 0..n {
        let (start, end) = (vertices[i], vertices[(i + 1) % n]);
        if options.antialiasing {
            s.draw_line_aa(start, end, color);
        } else if thickness <= 1 {
            s.draw_line(start, end, color);
        } else {
            s.draw_thick_line(start, end, color, thickness);
        }
    }
}

/// One of the shapes that can be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
    Pill(Pill),
}

impl Shape {
    /// The name of this kind of shape, as used in shape records.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
            Shape::Polygon(_) => "polygon",
            Shape::Pill(_) => "pill",
        }
    }

    /// Render this shape onto a surface.
    #[inline]
    pub fn render<S: Surface + ?Sized>(&self, s: &mut S, options: &RenderOptions) {
        match self {
            Shape::Line(line) => line.render(s, options),
            Shape::Circle(circle) => circle.render(s, options),
            Shape::Rectangle(rectangle) => rectangle.render(s, options),
            Shape::Polygon(polygon) => polygon.render(s, options),
            Shape::Pill(pill) => pill.render(s, options),
        }
    }

    /// Tell if the point is close enough to this shape to select it.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Line(line) => line.contains(point),
            Shape::Circle(circle) => circle.contains(point),
            Shape::Rectangle(rectangle) => rectangle.contains(point),
            Shape::Polygon(polygon) => polygon.contains(point),
            Shape::Pill(pill) => pill.contains(point),
        }
    }

    /// Move the shape by the given offset.
    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Line(line) => line.translate(dx, dy),
            Shape::Circle(circle) => circle.translate(dx, dy),
            Shape::Rectangle(rectangle) => rectangle.translate(dx, dy),
            Shape::Polygon(polygon) => polygon.translate(dx, dy),
            Shape::Pill(pill) => pill.translate(dx, dy),
        }
    }

    /// The points this shape can be grabbed by, shown as selection handles.
    #[inline]
    pub fn control_points(&self) -> ControlPoints {
        match self {
            Shape::Line(line) => line.control_points(),
            Shape::Circle(circle) => circle.control_points(),
            Shape::Rectangle(rectangle) => rectangle.control_points(),
            Shape::Polygon(polygon) => polygon.control_points(),
            Shape::Pill(pill) => pill.control_points(),
        }
    }

    /// The outline color.
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Shape::Line(line) => line.color(),
            Shape::Circle(circle) => circle.color(),
            Shape::Rectangle(rectangle) => rectangle.color(),
            Shape::Polygon(polygon) => polygon.color(),
            Shape::Pill(pill) => pill.color(),
        }
    }

    /// Set the outline color.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        match self {
            Shape::Line(line) => line.set_color(color),
            Shape::Circle(circle) => circle.set_color(color),
            Shape::Rectangle(rectangle) => rectangle.set_color(color),
            Shape::Polygon(polygon) => polygon.set_color(color),
            Shape::Pill(pill) => pill.set_color(color),
        }
    }

    /// The vertices of this shape as a closed polygon, if it is one.
    #[inline]
    pub fn vertices(&self) -> Option<Vec<Point>> {
        match self {
            Shape::Rectangle(rectangle) => Some(rectangle.vertices().to_vec()),
            Shape::Polygon(polygon) => Some(polygon.vertices().to_vec()),
            _ => None,
        }
    }

    /// Tell if this shape is a convex polygon.
    #[inline]
    pub fn is_convex(&self) -> bool {
        match self {
            Shape::Rectangle(rectangle) => rectangle.is_convex(),
            Shape::Polygon(polygon) => polygon.is_convex(),
            _ => false,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant: ident),*) => {
        $(
            impl From<$variant> for Shape {
                #[inline]
                fn from(shape: $variant) -> Shape {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant! { Line, Circle, Rectangle, Polygon, Pill }
