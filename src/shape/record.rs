// MIT/Apache2 License

//! Plain records that shapes are persisted as.
//!
//! Textures are never part of a record. A textured shape is written without a fill, and the caller has to
//! store the texture itself if it wants to keep it.

use super::{Circle, Line, PenType, Pill, Polygon, Rectangle, Shape};
use crate::{Color, Error, FillRule};
use easel_geometry::Point;
use serde::{Deserialize, Serialize};

/// An RGBA color, with every channel between 0 and 255.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorRecord {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for ColorRecord {
    #[inline]
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.into_array();
        Self { r, g, b, a }
    }
}

impl From<ColorRecord> for Color {
    #[inline]
    fn from(record: ColorRecord) -> Self {
        Color::rgba(record.r, record.g, record.b, record.a)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: i32,
    pub y: i32,
}

impl From<Point> for PointRecord {
    #[inline]
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<PointRecord> for Point {
    #[inline]
    fn from(record: PointRecord) -> Self {
        Point::new(record.x, record.y)
    }
}

/// A shape as a flat record, tagged with its kind under `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeRecord {
    Line {
        start: PointRecord,
        end: PointRecord,
        color: ColorRecord,
        thickness: u32,
        #[serde(default)]
        pen: PenType,
    },
    Circle {
        center: PointRecord,
        radius: i32,
        color: ColorRecord,
    },
    Rectangle {
        top_left: PointRecord,
        bottom_right: PointRecord,
        color: ColorRecord,
        thickness: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill_color: Option<ColorRecord>,
    },
    Polygon {
        vertices: Vec<PointRecord>,
        color: ColorRecord,
        thickness: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill_color: Option<ColorRecord>,
    },
    Pill {
        start: PointRecord,
        end: PointRecord,
        radius: i32,
        color: ColorRecord,
    },
}

impl ShapeRecord {
    /// The names that can appear under `"type"`.
    pub const KINDS: [&'static str; 5] = ["line", "circle", "rectangle", "polygon", "pill"];

    /// Parse a record out of a JSON value.
    ///
    /// A `"type"` this crate doesn't know gives [`Error::UnknownShape`], so that callers can tell records
    /// written by a newer version apart from broken ones.
    pub fn from_value(value: serde_json::Value) -> crate::Result<ShapeRecord> {
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::Msg("record has no \"type\"".into()))?;
        if !Self::KINDS.contains(&kind) {
            return Err(Error::UnknownShape(kind.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// The solid part of a fill. Textures are dropped.
fn fill_color(fill: Option<&FillRule>, kind: &str) -> Option<ColorRecord> {
    match fill? {
        FillRule::SolidColor(color) => Some((*color).into()),
        FillRule::Texture(_) => {
            log::warn!("Texture fill of a {} is not written to its record", kind);
            None
        }
    }
}

impl Shape {
    /// Turn this shape into a record.
    pub fn to_record(&self) -> ShapeRecord {
        match self {
            Shape::Line(line) => ShapeRecord::Line {
                start: line.start().into(),
                end: line.end().into(),
                color: line.color().into(),
                thickness: line.thickness(),
                pen: line.pen(),
            },
            Shape::Circle(circle) => ShapeRecord::Circle {
                center: circle.center().into(),
                radius: circle.radius(),
                color: circle.color().into(),
            },
            Shape::Rectangle(rectangle) => ShapeRecord::Rectangle {
                top_left: rectangle.top_left().into(),
                bottom_right: rectangle.bottom_right().into(),
                color: rectangle.color().into(),
                thickness: rectangle.thickness(),
                fill_color: fill_color(rectangle.fill(), self.kind()),
            },
            Shape::Polygon(polygon) => ShapeRecord::Polygon {
                vertices: polygon.vertices().iter().map(|&v| v.into()).collect(),
                color: polygon.color().into(),
                thickness: polygon.thickness(),
                fill_color: fill_color(polygon.fill(), self.kind()),
            },
            Shape::Pill(pill) => ShapeRecord::Pill {
                start: pill.start().into(),
                end: pill.end().into(),
                radius: pill.radius(),
                color: pill.color().into(),
            },
        }
    }

    /// Rebuild a shape from a record.
    ///
    /// Records that could not have come from a shape, like polygons with fewer than three vertices, are
    /// rejected.
    pub fn from_record(record: ShapeRecord) -> crate::Result<Shape> {
        let shape = match record {
            ShapeRecord::Line {
                start,
                end,
                color,
                thickness,
                pen,
            } => Line::new(start.into(), end.into(), color.into(), thickness, pen).into(),
            ShapeRecord::Circle {
                center,
                radius,
                color,
            } => {
                if radius < 0 {
                    return Err(Error::Msg(format!("circle radius {} is negative", radius)));
                }
                Circle::new(center.into(), radius, color.into()).into()
            }
            ShapeRecord::Rectangle {
                top_left,
                bottom_right,
                color,
                thickness,
                fill_color,
            } => {
                let mut rectangle =
                    Rectangle::new(top_left.into(), bottom_right.into(), color.into(), thickness);
                rectangle.set_fill(fill_color.map(|c| FillRule::SolidColor(c.into())));
                rectangle.into()
            }
            ShapeRecord::Polygon {
                vertices,
                color,
                thickness,
                fill_color,
            } => {
                if vertices.len() < 3 {
                    return Err(Error::Msg(format!(
                        "polygon has {} vertices, at least 3 are needed",
                        vertices.len()
                    )));
                }
                let vertices = vertices.into_iter().map(Point::from).collect();
                let mut polygon = Polygon::new(vertices, color.into(), thickness);
                polygon.set_fill(fill_color.map(|c| FillRule::SolidColor(c.into())));
                polygon.into()
            }
            ShapeRecord::Pill {
                start,
                end,
                radius,
                color,
            } => {
                if radius < 0 {
                    return Err(Error::Msg(format!("pill radius {} is negative", radius)));
                }
                Pill::finalized(start.into(), end.into(), radius, color.into()).into()
            }
        };

        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageFormat, Texture};

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ]
    }

    #[test]
    fn polygon_round_trip() {
        let polygon = Polygon::new(square(), Color::rgba(10, 20, 30, 255), 3);
        let json = serde_json::to_string(&Shape::from(polygon.clone()).to_record()).unwrap();
        let record: ShapeRecord = serde_json::from_str(&json).unwrap();

        match Shape::from_record(record).unwrap() {
            Shape::Polygon(restored) => {
                assert_eq!(restored.vertices(), polygon.vertices());
                assert_eq!(restored.color(), polygon.color());
                assert_eq!(restored.thickness(), polygon.thickness());
                assert!(restored.fill().is_none());
            }
            other => panic!("expected a polygon, got {:?}", other),
        }
    }

    #[test]
    fn record_layout() {
        let circle: Shape = Circle::new(Point::new(4, 5), 6, Color::BLACK).into();
        let value = serde_json::to_value(circle.to_record()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "circle",
                "center": { "x": 4, "y": 5 },
                "radius": 6,
                "color": { "r": 0, "g": 0, "b": 0, "a": 255 },
            })
        );
    }

    #[test]
    fn every_shape_survives() {
        let mut rectangle = Rectangle::new(Point::new(1, 2), Point::new(30, 40), Color::BLACK, 2);
        rectangle.set_fill_color(Color::rgb(1, 2, 3));

        let shapes: Vec<Shape> = vec![
            Line::new(Point::new(0, 0), Point::new(5, 9), Color::BLACK, 4, PenType::Brush).into(),
            Circle::new(Point::new(7, 7), 3, Color::WHITE).into(),
            rectangle.into(),
            Pill::finalized(Point::new(0, 0), Point::new(40, 0), 8, Color::BLACK).into(),
        ];

        for shape in shapes {
            let restored = Shape::from_record(shape.to_record()).unwrap();
            assert_eq!(restored, shape);
        }
    }

    #[test]
    fn textures_are_not_recorded() {
        let texture = Texture::from_bytes(&[0; 4], 2, 2, ImageFormat::Grayscale).unwrap();
        let mut polygon = Polygon::new(square(), Color::BLACK, 1);
        polygon.set_fill_texture(texture);

        match Shape::from(polygon).to_record() {
            ShapeRecord::Polygon { fill_color, .. } => assert!(fill_color.is_none()),
            other => panic!("expected a polygon record, got {:?}", other),
        }
    }

    #[test]
    fn missing_pen_defaults_to_regular() {
        let record: ShapeRecord = serde_json::from_str(
            r#"{"type": "line", "start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 1},
                "color": {"r": 0, "g": 0, "b": 0, "a": 255}, "thickness": 1}"#,
        )
        .unwrap();
        match record {
            ShapeRecord::Line { pen, .. } => assert_eq!(pen, PenType::Regular),
            other => panic!("expected a line record, got {:?}", other),
        }
    }

    #[test]
    fn unknown_kinds_are_reported() {
        let value = serde_json::json!({ "type": "hexagon", "sides": 6 });
        match ShapeRecord::from_value(value) {
            Err(Error::UnknownShape(kind)) => assert_eq!(kind, "hexagon"),
            other => panic!("expected an unknown shape, got {:?}", other),
        }

        let value = serde_json::json!({ "type": "circle", "radius": 4 });
        assert!(matches!(ShapeRecord::from_value(value), Err(Error::Json(_))));
    }

    #[test]
    fn impossible_records_are_rejected() {
        let record = ShapeRecord::Polygon {
            vertices: vec![PointRecord { x: 0, y: 0 }, PointRecord { x: 1, y: 1 }],
            color: Color::BLACK.into(),
            thickness: 1,
            fill_color: None,
        };
        assert!(Shape::from_record(record).is_err());
    }
}
