//! Drawing session: the state of one canvas and the controls around it.
//!
//! A [`DrawingSession`] owns the surface, the mode controller, the stroke
//! renderer and the brush. Hosts feed it [`UiEvent`]s; every operation
//! returns a `Result`, and [`DrawingSession::handle`] forwards failures to an
//! [`ErrorSink`] so one bad input never ends the session.

mod options;
mod report;

pub use options::SessionOptions;
pub use report::{ErrorSink, LogSink, RecordingSink};

use crate::draw::cairo_surface::MAX_SIDE;
use crate::draw::{CairoSurface, CanvasSurface};
use crate::error::CanvasError;
use crate::export::ExportSink;
use crate::input::{BrushConfig, DrawingMode, ModeController, StrokeRenderer, UiEvent};
use crate::util::{self, Point};
use std::path::PathBuf;

/// One canvas with its mode controls, brush inputs and save button.
pub struct DrawingSession<S: CanvasSurface = CairoSurface> {
    surface: S,
    controller: ModeController,
    renderer: StrokeRenderer,
    brush: BrushConfig,
    origin: Point,
    size_options: Vec<u32>,
    exporter: Box<dyn ExportSink>,
    errors: Box<dyn ErrorSink>,
}

impl<S: CanvasSurface> DrawingSession<S> {
    /// Creates a session and runs the startup steps: the canvas is sized to
    /// `options.default_size` and freehand mode is selected.
    ///
    /// Startup failures are reported like any other failed operation.
    pub fn new(
        options: SessionOptions,
        surface: S,
        exporter: Box<dyn ExportSink>,
        errors: Box<dyn ErrorSink>,
    ) -> Self {
        let mut size_options = options.size_options;
        if (1..=MAX_SIDE).contains(&options.default_size)
            && !size_options.contains(&options.default_size)
        {
            size_options.push(options.default_size);
            size_options.sort_unstable();
        }
        let renderer = StrokeRenderer::new(
            options.brush,
            options.eraser_color,
            options.live_shape_preview,
            options.font,
        );
        let mut session = Self {
            surface,
            controller: ModeController::new(options.variant),
            renderer,
            brush: options.brush,
            origin: Point::ORIGIN,
            size_options,
            exporter,
            errors,
        };

        let startup = session.resize_to(options.default_size);
        session.report("changing canvas size", startup);
        let startup = session.controller.set_mode(DrawingMode::Freehand);
        session.report("handling drawing mode", startup);

        log::info!(
            "Canvas ready: {}x{} ({} variant)",
            session.surface.side(),
            session.surface.side(),
            session.controller.variant()
        );
        session
    }

    /// Applies one UI event, reporting any failure instead of returning it.
    pub fn handle(&mut self, event: UiEvent) {
        log::debug!("Event: {:?}", event);
        match event {
            UiEvent::SetMode { mode } => {
                let result = self.set_mode(&mode);
                self.report("handling drawing mode", result);
            }
            UiEvent::PointerDown { x, y } => {
                let result = self.pointer_down(Point::new(x, y));
                self.report("starting position", result);
            }
            UiEvent::PointerMove { x, y } => {
                let result = self.pointer_move(Point::new(x, y));
                self.report("drawing", result);
            }
            UiEvent::PointerUp { x, y } => {
                let result = self.pointer_up(Point::new(x, y));
                self.report("ending position", result);
            }
            UiEvent::CanvasOffset { left, top } => {
                self.set_canvas_offset(Point::new(left, top));
            }
            UiEvent::Clear => {
                let result = self.clear();
                self.report("clearing canvas", result);
            }
            UiEvent::Save => {
                let result = self.export().map(|_| ());
                self.report("saving canvas", result);
            }
            UiEvent::Resize { size } => {
                let result = self.resize(&size);
                self.report("changing canvas size", result);
            }
            UiEvent::BrushWidth { value } => {
                let result = self.set_brush_width(&value);
                self.report("updating brush size", result);
            }
            UiEvent::BrushColor { value } => {
                let result = self.set_brush_color(&value);
                self.report("updating brush color", result);
            }
            UiEvent::Text { text } => {
                let result = self.commit_text(&text);
                self.report("placing text", result);
            }
        }
    }

    fn report(&mut self, operation: &str, result: Result<(), CanvasError>) {
        if let Err(err) = result {
            self.errors.report(operation, &err);
        }
    }

    /// Selects a mode by its control identifier.
    ///
    /// Leaving text mode drops any pending text anchor.
    pub fn set_mode(&mut self, name: &str) -> Result<(), CanvasError> {
        let was_text = self.controller.mode() == DrawingMode::Text;
        self.controller.set_mode_by_name(name)?;
        if was_text && self.controller.mode() != DrawingMode::Text {
            self.renderer.reset_text_anchor();
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, client: Point) -> Result<(), CanvasError> {
        let pos = self.to_canvas(client);
        self.renderer
            .on_pointer_down(self.controller.mode(), &self.brush, &mut self.surface, pos)
    }

    pub fn pointer_move(&mut self, client: Point) -> Result<(), CanvasError> {
        let pos = self.to_canvas(client);
        self.renderer
            .on_pointer_move(self.controller.mode(), &self.brush, &mut self.surface, pos)
    }

    pub fn pointer_up(&mut self, client: Point) -> Result<(), CanvasError> {
        let pos = self.to_canvas(client);
        self.renderer
            .on_pointer_up(self.controller.mode(), &mut self.surface, pos)
    }

    /// Records where the canvas sits on screen.
    pub fn set_canvas_offset(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn to_canvas(&self, client: Point) -> Point {
        client.offset_from(self.origin)
    }

    pub fn clear(&mut self) -> Result<(), CanvasError> {
        self.renderer.clear(&mut self.surface)
    }

    /// Resizes to the side length selected in the size control.
    ///
    /// Only the sizes the control offers are accepted.
    pub fn resize(&mut self, value: &str) -> Result<(), CanvasError> {
        let side = util::parse_side_length(value)
            .ok_or_else(|| CanvasError::InvalidSize(format!("'{value}' is not a side length")))?;
        if !self.size_options.contains(&side) {
            return Err(CanvasError::InvalidSize(format!(
                "{side} is not one of the offered sizes {:?}",
                self.size_options
            )));
        }
        self.resize_to(side)
    }

    /// Makes the canvas `side` x `side` and clears it.
    pub fn resize_to(&mut self, side: u32) -> Result<(), CanvasError> {
        if !(1..=MAX_SIDE).contains(&side) {
            return Err(CanvasError::InvalidSize(format!(
                "{side} is outside 1-{MAX_SIDE}"
            )));
        }
        self.renderer.resize(&mut self.surface, side)
    }

    /// Encodes the canvas as PNG and hands it to the export sink.
    pub fn export(&mut self) -> Result<PathBuf, CanvasError> {
        let png = self.surface.export_png()?;
        let path = self.exporter.export(&png)?;
        log::info!("Canvas saved to {}", path.display());
        Ok(path)
    }

    /// Parses the brush size input. Applies from the next paint.
    pub fn set_brush_width(&mut self, value: &str) -> Result<(), CanvasError> {
        let width = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0)
            .ok_or_else(|| {
                CanvasError::InvalidBrushWidth(format!("'{value}' is not a positive number"))
            })?;
        self.brush.width = width;
        self.renderer.update_brush_size(&self.brush);
        Ok(())
    }

    /// Parses the color picker value (`#rgb`, `#rrggbb` or a color name).
    pub fn set_brush_color(&mut self, value: &str) -> Result<(), CanvasError> {
        let color = util::parse_color_input(value)
            .ok_or_else(|| CanvasError::InvalidColor(value.to_string()))?;
        self.brush.color = color;
        log::debug!(
            "Brush color set to {} ({})",
            color.to_hex(),
            util::color_to_name(&color)
        );
        Ok(())
    }

    /// Stamps `text` at the point last clicked in text mode.
    pub fn commit_text(&mut self, text: &str) -> Result<(), CanvasError> {
        if self.controller.mode() != DrawingMode::Text {
            return Err(CanvasError::NoTextAnchor(format!(
                "text mode is not active (mode is {})",
                self.controller.mode()
            )));
        }
        self.renderer
            .commit_text(text, &self.brush, &mut self.surface)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    pub fn renderer(&self) -> &StrokeRenderer {
        &self.renderer
    }

    pub fn brush(&self) -> BrushConfig {
        self.brush
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size_options(&self) -> &[u32] {
        &self.size_options
    }
}
