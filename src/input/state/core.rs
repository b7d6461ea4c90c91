//! Stroke renderer state and canvas-wide operations.

use crate::draw::{BLACK, CanvasSurface, Color, FontDescriptor, StrokeStyle, WHITE};
use crate::error::CanvasError;
use crate::util::Point;

/// Pointer state machine.
///
/// Tracks whether a pointer button is held over the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// No button held - pointer moves are ignored
    Idle,
    /// Button held over the canvas
    Painting {
        /// Canvas position of the pointer-down
        start: Point,
        /// End of the last stroked segment (freehand/eraser)
        last: Point,
        /// Most recent pointer position
        current: Point,
    },
}

/// Brush values set through the UI and read on every paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushConfig {
    /// Line width in pixels (always positive)
    pub width: f64,
    /// Stroke color for freehand, shapes and text
    pub color: Color,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            width: 5.0,
            color: BLACK,
        }
    }
}

/// Turns pointer events into paint commands on a [`CanvasSurface`].
///
/// The renderer holds only transient per-stroke state. The mode it obeys and
/// the brush it reads are passed in with each event.
#[derive(Debug, Clone)]
pub struct StrokeRenderer {
    /// Current pointer state
    pub state: DrawingState,
    /// Stroke style as last applied; shapes are outlined with it
    pub pen: StrokeStyle,
    /// Color painted by the eraser (the page background)
    pub eraser_color: Color,
    /// Redraw the pending shape on every pointer move
    pub live_shape_preview: bool,
    /// Font used by text stamps
    pub font: FontDescriptor,
    /// Where the next text stamp goes (text mode only)
    pub(super) text_anchor: Option<Point>,
}

impl Default for StrokeRenderer {
    fn default() -> Self {
        Self::new(BrushConfig::default(), WHITE, false, FontDescriptor::default())
    }
}

impl StrokeRenderer {
    pub fn new(
        brush: BrushConfig,
        eraser_color: Color,
        live_shape_preview: bool,
        font: FontDescriptor,
    ) -> Self {
        Self {
            state: DrawingState::Idle,
            pen: StrokeStyle::round(brush.width, brush.color),
            eraser_color,
            live_shape_preview,
            font,
            text_anchor: None,
        }
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.state, DrawingState::Painting { .. })
    }

    pub fn text_anchor(&self) -> Option<Point> {
        self.text_anchor
    }

    /// Copies the brush width into the pen.
    ///
    /// Already painted pixels keep their width; the next paint uses the new one.
    pub fn update_brush_size(&mut self, brush: &BrushConfig) {
        self.pen.width = brush.width;
        log::debug!("Stroke width set to {:.1}px", self.pen.width);
    }

    /// Wipes the canvas. Pointer state and mode are untouched.
    pub fn clear(&self, surface: &mut dyn CanvasSurface) -> Result<(), CanvasError> {
        surface.clear()
    }

    /// Makes the canvas `side` x `side`, discarding its content.
    pub fn resize(&self, surface: &mut dyn CanvasSurface, side: u32) -> Result<(), CanvasError> {
        surface.resize(side)?;
        log::info!("Canvas resized to {side}x{side}");
        Ok(())
    }

    /// Stamps `text` at the text anchor in the brush color.
    ///
    /// The anchor is consumed; the next stamp needs a new click.
    pub fn commit_text(
        &mut self,
        text: &str,
        brush: &BrushConfig,
        surface: &mut dyn CanvasSurface,
    ) -> Result<(), CanvasError> {
        let anchor = self.text_anchor.ok_or_else(|| {
            CanvasError::NoTextAnchor("click the canvas in text mode first".to_string())
        })?;

        if text.is_empty() {
            return Ok(());
        }

        surface.draw_text(anchor, text, brush.color, &self.font)?;
        self.text_anchor = None;
        log::debug!("Placed text at ({:.0}, {:.0})", anchor.x, anchor.y);
        Ok(())
    }

    /// Drops the text anchor, e.g. when leaving text mode.
    pub fn reset_text_anchor(&mut self) {
        self.text_anchor = None;
    }
}
