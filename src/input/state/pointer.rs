use crate::draw::{CanvasSurface, Shape, ShapeKind, StrokeStyle};
use crate::error::CanvasError;
use crate::input::mode::DrawingMode;
use crate::util::Point;

use super::{BrushConfig, DrawingState, StrokeRenderer};

impl StrokeRenderer {
    /// Processes a pointer press at canvas position `pos`.
    ///
    /// # Behavior
    /// - Always enters `Painting` with start = last = current = `pos`
    /// - Freehand/Eraser: paints a dot at `pos` so a click marks the canvas
    /// - Circle/Rectangle: records the shape anchor
    /// - Text: moves the text anchor to `pos`
    pub fn on_pointer_down(
        &mut self,
        mode: DrawingMode,
        brush: &BrushConfig,
        surface: &mut dyn CanvasSurface,
        pos: Point,
    ) -> Result<(), CanvasError> {
        self.state = DrawingState::Painting {
            start: pos,
            last: pos,
            current: pos,
        };
        self.paint_step(mode, brush, surface, pos)
    }

    /// Processes pointer motion at canvas position `pos`.
    ///
    /// # Behavior
    /// - Idle: ignored
    /// - Freehand/Eraser: strokes one segment from the last point to `pos`
    /// - Circle/Rectangle: tracks `pos` as the shape end; draws a preview
    ///   only when live preview is enabled
    /// - Text: follows the pointer with the text anchor
    pub fn on_pointer_move(
        &mut self,
        mode: DrawingMode,
        brush: &BrushConfig,
        surface: &mut dyn CanvasSurface,
        pos: Point,
    ) -> Result<(), CanvasError> {
        if !self.is_painting() {
            return Ok(());
        }
        self.paint_step(mode, brush, surface, pos)
    }

    /// Processes a pointer release at canvas position `pos`.
    ///
    /// # Behavior
    /// Returns to `Idle` in every mode. In a shape mode the canvas is then
    /// cleared and the shape from the drag start to `pos` is stroked.
    /// A release without a matching press does nothing.
    pub fn on_pointer_up(
        &mut self,
        mode: DrawingMode,
        surface: &mut dyn CanvasSurface,
        pos: Point,
    ) -> Result<(), CanvasError> {
        let DrawingState::Painting { start, .. } = self.state else {
            return Ok(());
        };
        self.state = DrawingState::Idle;

        match mode.shape_kind() {
            Some(kind) => self.commit_shape(kind, start, pos, surface),
            None => Ok(()),
        }
    }

    fn paint_step(
        &mut self,
        mode: DrawingMode,
        brush: &BrushConfig,
        surface: &mut dyn CanvasSurface,
        pos: Point,
    ) -> Result<(), CanvasError> {
        let DrawingState::Painting {
            start,
            last,
            current,
        } = &mut self.state
        else {
            return Ok(());
        };
        *current = pos;

        match mode {
            DrawingMode::Freehand | DrawingMode::Eraser => {
                let color = if mode == DrawingMode::Eraser {
                    self.eraser_color
                } else {
                    brush.color
                };
                self.pen = StrokeStyle::round(brush.width, color);
                let from = *last;
                surface.stroke_line(from, pos, &self.pen)?;
                *last = pos;
                Ok(())
            }
            DrawingMode::Circle | DrawingMode::Rectangle => {
                let start = *start;
                self.pen = StrokeStyle::round(brush.width, brush.color);
                match mode.shape_kind() {
                    Some(kind) if self.live_shape_preview && start != pos => {
                        surface.clear()?;
                        surface.stroke_shape(&Shape::from_drag(kind, start, pos), &self.pen)
                    }
                    _ => Ok(()),
                }
            }
            DrawingMode::Text => {
                self.text_anchor = Some(pos);
                Ok(())
            }
        }
    }

    fn commit_shape(
        &mut self,
        kind: ShapeKind,
        start: Point,
        end: Point,
        surface: &mut dyn CanvasSurface,
    ) -> Result<(), CanvasError> {
        let shape = Shape::from_drag(kind, start, end);
        surface.clear()?;
        surface.stroke_shape(&shape, &self.pen)?;
        log::debug!("Committed {:?}", shape);
        Ok(())
    }
}
