// MIT/Apache2 License

//! The drawing being edited: its shapes, the tool in use and whatever is half-built.
//!
//! A [`DrawingState`] is driven by [`InputEvent`]s and rendered onto any [`Surface`]. It owns every shape;
//! the selection is an index into the shape list, and the shape under construction is kept aside until it
//! is committed.

mod input;
pub use input::{InputEvent, Key};

use crate::{Color, FillRule, PenType, PixelBuffer, RenderOptions, Shape, Surface};
use easel_geometry::Point;

#[cfg(feature = "serde")]
use crate::{Error, ShapeRecord};

/// The color of the selection handles.
pub const HANDLE_COLOR: Color = Color::rgb(0, 119, 255);

/// Handles on rectangle corners are drawn bigger, since they can be dragged.
const RESIZE_HANDLE_SIZE: i32 = 8;
const HANDLE_SIZE: i32 = 5;

/// The flood fill color used when the settings carry no solid fill color.
const FALLBACK_FLOOD_COLOR: Color = Color::rgb(100, 100, 100);

/// What pointer input does.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tool {
    /// Pick, move and resize shapes.
    Select,
    Line,
    Circle,
    Rectangle,
    Polygon,
    Pill,
    /// Clip the polygon under the pointer with the selected convex shape.
    Clip,
    /// Flood the region under the pointer.
    FloodFill,
}

impl Default for Tool {
    #[inline]
    fn default() -> Self {
        Tool::Select
    }
}

/// How new shapes are styled.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    /// Outline color of new shapes.
    pub color: Color,
    /// Outline thickness of new rectangles and polygons, and of lines drawn with the brush.
    pub thickness: u32,
    pub pen: PenType,
    /// The fill of new rectangles and polygons, and the flood fill color if it is solid.
    pub fill: Option<FillRule>,
    /// The color that stops a flood fill.
    pub boundary_color: Color,
}

impl Default for ToolSettings {
    #[inline]
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: 1,
            pen: PenType::Regular,
            fill: None,
            boundary_color: Color::BLACK,
        }
    }
}

impl ToolSettings {
    /// The color the flood fill tool paints with.
    #[inline]
    pub fn flood_color(&self) -> Color {
        self.fill
            .as_ref()
            .and_then(FillRule::solid_color)
            .unwrap_or(FALLBACK_FLOOD_COLOR)
    }
}

/// What the pointer is doing between a press and a release.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Gesture {
    Idle,
    /// Dragging out a new shape from `anchor`.
    Drawing { anchor: Point },
    /// Dragging the selected shape; `last` is where the pointer was at the previous event.
    Moving { last: Point },
    /// Dragging a corner of the selected rectangle.
    Resizing { handle: crate::ResizeHandle },
}

/// A drawing and the editing state around it.
#[derive(Debug, Clone)]
pub struct DrawingState {
    shapes: Vec<Shape>,
    current: Option<Shape>,
    polygon_vertices: Vec<Point>,
    selected: Option<usize>,
    tool: Tool,
    settings: ToolSettings,
    base: PixelBuffer,
    gesture: Gesture,
}

impl DrawingState {
    /// Create an empty drawing of the given size.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            shapes: Vec::new(),
            current: None,
            polygon_vertices: Vec::new(),
            selected: None,
            tool: Tool::default(),
            settings: ToolSettings::default(),
            base: PixelBuffer::new(width, height),
            gesture: Gesture::Idle,
        }
    }

    /// The committed shapes, bottom to top.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Add a shape on top of the others.
    #[inline]
    pub fn push_shape(&mut self, shape: Shape) {
        log::debug!("Committing {}", shape.kind());
        self.shapes.push(shape);
    }

    /// The shape being built, if any.
    #[inline]
    pub fn current(&self) -> Option<&Shape> {
        self.current.as_ref()
    }

    /// The index of the selected shape.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    #[inline]
    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        self.selected.and_then(move |i| self.shapes.get_mut(i))
    }

    /// Select the shape at `index`, or nothing. Out of range indices select nothing.
    #[inline]
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.shapes.len());
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Anything half-built is dropped; the selection is kept.
    #[inline]
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            log::debug!("Switching from {:?} to {:?}", self.tool, tool);
            self.tool = tool;
            self.cancel();
        }
    }

    #[inline]
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    /// The raster layer under the shapes, which holds flood fills.
    #[inline]
    pub fn base(&self) -> &PixelBuffer {
        &self.base
    }

    /// Drop everything that is half-built.
    #[inline]
    pub fn cancel(&mut self) {
        self.current = None;
        self.polygon_vertices.clear();
        self.gesture = Gesture::Idle;
    }

    /// Render the base layer, the shapes and the shape being built, without selection handles.
    pub fn render_scene<S: Surface + ?Sized>(&self, s: &mut S, options: &RenderOptions) {
        self.base
            .points()
            .filter(|(_, color)| !color.is_transparent())
            .for_each(|(point, color)| s.set_pixel(point.x, point.y, color));

        for shape in &self.shapes {
            shape.render(s, options);
        }
        if let Some(current) = &self.current {
            current.render(s, options);
        }
    }

    /// Render the drawing. While selecting, the selected shape's control points get handles.
    pub fn render<S: Surface + ?Sized>(&self, s: &mut S, options: &RenderOptions) {
        self.render_scene(s, options);

        if self.tool != Tool::Select {
            return;
        }
        if let Some(shape) = self.selected_shape() {
            let size = match shape {
                Shape::Rectangle(_) => RESIZE_HANDLE_SIZE,
                _ => HANDLE_SIZE,
            };
            for point in shape.control_points() {
                draw_handle(s, point, size);
            }
        }
    }

    /// Write the shapes out as a JSON document of the form `{"shapes": [...]}`.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        let document = Document {
            shapes: self.shapes.iter().map(Shape::to_record).collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Replace the shapes with the ones in a JSON document, returning how many were loaded.
    ///
    /// Shapes of unknown kinds are skipped. Any other broken entry fails the whole load and leaves the
    /// drawing untouched.
    #[cfg(feature = "serde")]
    pub fn load_json(&mut self, json: &str) -> crate::Result<usize> {
        let document: Document<serde_json::Value> = serde_json::from_str(json)?;
        let mut shapes = Vec::with_capacity(document.shapes.len());

        for (index, value) in document.shapes.into_iter().enumerate() {
            let record = match ShapeRecord::from_value(value) {
                Ok(record) => record,
                Err(Error::UnknownShape(kind)) => {
                    log::warn!("Skipping shape #{} of unknown type \"{}\"", index, kind);
                    continue;
                }
                Err(e) => {
                    return Err(Error::InvalidRecord {
                        index,
                        reason: e.to_string(),
                    })
                }
            };

            let shape = Shape::from_record(record).map_err(|e| Error::InvalidRecord {
                index,
                reason: e.to_string(),
            })?;
            shapes.push(shape);
        }

        log::debug!("Loaded {} shapes", shapes.len());
        self.shapes = shapes;
        self.selected = None;
        self.cancel();
        Ok(self.shapes.len())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Document<R> {
    shapes: Vec<R>,
}

/// Draw a square handle outline, plus its center pixel.
fn draw_handle<S: Surface + ?Sized>(s: &mut S, center: Point, size: i32) {
    let half = size / 2;
    for dy in -half..=half {
        for dx in -half..=half {
            let on_edge = dx.abs() == half || dy.abs() == half;
            if on_edge || (dx == 0 && dy == 0) {
                s.set_pixel(center.x + dx, center.y + dy, HANDLE_COLOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Circle, Line, Polygon, Rectangle};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn selection_handles() {
        init();
        let mut state = DrawingState::new(40, 40);
        state.push_shape(Line::new(Point::new(10, 10), Point::new(30, 10), Color::BLACK, 1, PenType::Regular).into());
        state.select(Some(0));

        let mut buffer = PixelBuffer::filled(40, 40, Color::WHITE);
        state.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.pixel(8, 8), Some(HANDLE_COLOR));
        assert_eq!(buffer.pixel(10, 10), Some(HANDLE_COLOR));
        assert_eq!(buffer.pixel(9, 9), Some(Color::WHITE));
        // 5x5 outline plus the center, at both ends
        assert_eq!(buffer.count(HANDLE_COLOR), 2 * 17);

        state.set_tool(Tool::Line);
        let mut buffer = PixelBuffer::filled(40, 40, Color::WHITE);
        state.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.count(HANDLE_COLOR), 0);
    }

    #[test]
    fn rectangle_handles_are_bigger() {
        init();
        let mut state = DrawingState::new(40, 40);
        state.push_shape(Rectangle::new(Point::new(10, 10), Point::new(30, 30), Color::BLACK, 1).into());
        state.select(Some(0));

        let mut buffer = PixelBuffer::filled(40, 40, Color::WHITE);
        state.render(&mut buffer, &RenderOptions::default());
        assert_eq!(buffer.pixel(6, 6), Some(HANDLE_COLOR));
        assert_eq!(buffer.pixel(34, 34), Some(HANDLE_COLOR));
    }

    #[test]
    fn selecting_out_of_range() {
        let mut state = DrawingState::new(10, 10);
        state.select(Some(3));
        assert_eq!(state.selected(), None);
        assert!(state.selected_shape().is_none());
    }

    #[test]
    fn flood_color_falls_back() {
        let mut settings = ToolSettings::default();
        assert_eq!(settings.flood_color(), FALLBACK_FLOOD_COLOR);
        settings.fill = Some(FillRule::SolidColor(Color::rgb(1, 2, 3)));
        assert_eq!(settings.flood_color(), Color::rgb(1, 2, 3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        init();
        let mut state = DrawingState::new(50, 50);
        state.push_shape(Circle::new(Point::new(20, 20), 8, Color::BLACK).into());
        state.push_shape(
            Polygon::new(
                vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10), Point::new(0, 10)],
                Color::rgb(255, 0, 0),
                2,
            )
            .into(),
        );

        let json = state.to_json().unwrap();
        let mut loaded = DrawingState::new(50, 50);
        assert_eq!(loaded.load_json(&json).unwrap(), 2);
        assert_eq!(loaded.shapes(), state.shapes());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_shapes_are_skipped() {
        init();
        let json = r#"{"shapes": [
            {"type": "star", "points": 5},
            {"type": "circle", "center": {"x": 5, "y": 5}, "radius": 3,
             "color": {"r": 0, "g": 0, "b": 0, "a": 255}}
        ]}"#;

        let mut state = DrawingState::new(20, 20);
        assert_eq!(state.load_json(json).unwrap(), 1);
        assert_eq!(state.shapes()[0].kind(), "circle");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn broken_shapes_fail_the_load() {
        init();
        let json = r#"{"shapes": [
            {"type": "circle", "center": {"x": 5, "y": 5}, "radius": 3,
             "color": {"r": 0, "g": 0, "b": 0, "a": 255}},
            {"type": "circle", "center": {"x": 5, "y": 5}}
        ]}"#;

        let mut state = DrawingState::new(20, 20);
        state.push_shape(Circle::new(Point::new(1, 1), 1, Color::BLACK).into());
        match state.load_json(json) {
            Err(Error::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected an invalid record, got {:?}", other),
        }
        assert_eq!(state.shapes().len(), 1);

        assert!(matches!(state.load_json("not json"), Err(Error::Json(_))));
    }
}
