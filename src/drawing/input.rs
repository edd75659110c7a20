// MIT/Apache2 License

use super::{DrawingState, Gesture, Tool};
use crate::{
    Circle, Color, Line, PenType, Pill, PillStage, PixelBuffer, Polygon, Rectangle, RenderOptions,
    Shape, Surface,
};
use easel_geometry::Point;

/// The keys the drawing reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Commit the polygon being built.
    Finish,
    /// Drop whatever is being built.
    Cancel,
    /// Remove the selected shape.
    Delete,
}

/// A single input event. Points are expected to already be clamped to the drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Key(Key),
}

impl DrawingState {
    /// Feed an input event to the drawing.
    pub fn handle(&mut self, event: InputEvent) {
        log::trace!("Handling {:?} with {:?}", event, self.tool);

        match event {
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            InputEvent::PointerUp(point) => self.pointer_up(point),
            InputEvent::Key(key) => self.key(key),
        }
    }

    fn pointer_down(&mut self, point: Point) {
        let color = self.settings.color;

        match self.tool {
            Tool::Select => self.select_at(point),
            Tool::Line => {
                let thickness = match self.settings.pen {
                    PenType::Brush => self.settings.thickness,
                    PenType::Regular => 1,
                };
                self.start_drawing(
                    point,
                    Line::new(point, point, color, thickness, self.settings.pen).into(),
                );
            }
            Tool::Circle => self.start_drawing(point, Circle::new(point, 1, color).into()),
            Tool::Rectangle => {
                let mut rectangle = Rectangle::new(point, point, color, self.settings.thickness);
                rectangle.set_fill(self.settings.fill.clone());
                self.start_drawing(point, rectangle.into());
            }
            Tool::Polygon => {
                self.polygon_vertices.push(point);
                if self.polygon_vertices.len() >= 3 {
                    let preview = Polygon::new(self.polygon_vertices.clone(), color, self.settings.thickness);
                    self.current = Some(preview.into());
                }
            }
            Tool::Pill => self.advance_pill(point),
            Tool::Clip => {}
            Tool::FloodFill => self.flood_at(point),
        }
    }

    fn pointer_move(&mut self, point: Point) {
        match self.gesture {
            Gesture::Resizing { handle } => {
                if let Some(Shape::Rectangle(rectangle)) = self.selected_shape_mut() {
                    let handle = rectangle.resize_by_handle(handle, point);
                    self.gesture = Gesture::Resizing { handle };
                }
            }
            Gesture::Moving { last } => {
                let (dx, dy) = (point.x - last.x, point.y - last.y);
                if dx != 0 || dy != 0 {
                    if let Some(shape) = self.selected_shape_mut() {
                        shape.translate(dx, dy);
                    }
                    self.gesture = Gesture::Moving { last: point };
                }
            }
            Gesture::Drawing { anchor } => match &mut self.current {
                Some(Shape::Line(line)) => line.set_end(point),
                Some(Shape::Circle(circle)) => circle.set_radius(anchor.distance_to(point) as i32),
                Some(Shape::Rectangle(rectangle)) => rectangle.set_corners(anchor, point),
                _ => {}
            },
            Gesture::Idle => {
                if let Some(Shape::Pill(pill)) = &mut self.current {
                    if pill.stage() == PillStage::RadiusSet {
                        pill.set_end(point);
                    }
                }
            }
        }
    }

    fn pointer_up(&mut self, point: Point) {
        match self.gesture {
            Gesture::Resizing { .. } | Gesture::Moving { .. } => self.gesture = Gesture::Idle,
            Gesture::Drawing { .. } => {
                self.pointer_move(point);
                self.gesture = Gesture::Idle;
                if let Some(shape) = self.current.take() {
                    self.push_shape(shape);
                }
            }
            Gesture::Idle => {
                if self.tool == Tool::Clip {
                    self.clip_at(point);
                }
            }
        }
    }

    fn key(&mut self, key: Key) {
        match key {
            Key::Finish => {
                if self.tool == Tool::Polygon && self.polygon_vertices.len() >= 3 {
                    let vertices = std::mem::take(&mut self.polygon_vertices);
                    let mut polygon = Polygon::new(vertices, self.settings.color, self.settings.thickness);
                    polygon.set_fill(self.settings.fill.clone());
                    self.current = None;
                    self.push_shape(polygon.into());
                }
            }
            Key::Cancel => self.cancel(),
            Key::Delete => {
                if self.tool != Tool::Select {
                    return;
                }
                if let Some(index) = self.selected.take() {
                    let shape = self.shapes.remove(index);
                    self.gesture = Gesture::Idle;
                    log::debug!("Deleted {} #{}", shape.kind(), index);
                }
            }
        }
    }

    #[inline]
    fn start_drawing(&mut self, anchor: Point, shape: Shape) {
        self.current = Some(shape);
        self.gesture = Gesture::Drawing { anchor };
    }

    /// Grab a corner of the selected rectangle, or else select and start moving the topmost shape under the
    /// pointer.
    fn select_at(&mut self, point: Point) {
        if let Some(Shape::Rectangle(rectangle)) = self.selected_shape() {
            if let Some(handle) = rectangle.resize_handle_at(point) {
                log::debug!("Resizing by the {:?} corner", handle);
                self.gesture = Gesture::Resizing { handle };
                return;
            }
        }

        self.selected = self.shapes.iter().rposition(|shape| shape.contains(point));
        match self.selected {
            Some(index) => {
                log::debug!("Selected {} #{}", self.shapes[index].kind(), index);
                self.gesture = Gesture::Moving { last: point };
            }
            None => self.gesture = Gesture::Idle,
        }
    }

    fn advance_pill(&mut self, point: Point) {
        match &mut self.current {
            Some(Shape::Pill(pill)) => {
                if pill.advance(point) == PillStage::Finalized {
                    if let Some(shape) = self.current.take() {
                        self.push_shape(shape);
                    }
                }
            }
            _ => {
                log::debug!("Starting a pill at ({}, {})", point.x, point.y);
                self.current = Some(Pill::new(point, self.settings.color).into());
            }
        }
    }

    /// Clip the topmost polygon under `point` with the selected shape.
    fn clip_at(&mut self, point: Point) {
        let selected = self.selected;
        let clipper = match self.selected_shape() {
            Some(shape) if shape.is_convex() => shape.vertices(),
            Some(_) => {
                log::warn!("The selected shape is not convex and can't be used to clip");
                return;
            }
            None => {
                log::warn!("Nothing is selected to clip with");
                return;
            }
        };
        let clipper = match clipper {
            Some(clipper) => clipper,
            None => return,
        };

        let subject = self
            .shapes
            .iter()
            .enumerate()
            .rev()
            .find(|&(i, shape)| Some(i) != selected && shape.contains(point))
            .map(|(_, shape)| shape);

        let clipped = match subject {
            Some(Shape::Polygon(polygon)) if polygon.is_simple() => polygon.clip_with(&clipper),
            Some(Shape::Polygon(_)) => {
                log::warn!("Self-intersecting polygons can't be clipped");
                return;
            }
            Some(other) => {
                log::warn!("Only polygons can be clipped, not a {}", other.kind());
                return;
            }
            None => return,
        };

        match clipped {
            Some(polygon) => self.push_shape(polygon.into()),
            None => log::debug!("Nothing is left of the clipped polygon"),
        }
    }

    /// Flood the region around `seed` as the drawing currently looks, and keep the result in the base
    /// layer.
    fn flood_at(&mut self, seed: Point) {
        let mut scratch = PixelBuffer::filled(self.base.width(), self.base.height(), Color::WHITE);
        self.render_scene(&mut scratch, &RenderOptions::default());
        let before = scratch.clone();

        scratch.flood_fill(seed, self.settings.flood_color(), self.settings.boundary_color);

        let mut changed = 0;
        for ((point, after), &old) in scratch.points().zip(before.pixels()) {
            if after != old {
                self.base.set_pixel(point.x, point.y, after);
                changed += 1;
            }
        }
        log::debug!("Flood fill changed {} pixels", changed);
    }
}
