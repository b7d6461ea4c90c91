//! The raster target the renderer paints into.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::Shape;
use crate::error::CanvasError;
use crate::util::Point;

/// How the ends of a stroked segment are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Pen settings applied to a single stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels
    pub width: f64,
    /// Stroke color
    pub color: Color,
    /// End cap style
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Round-capped style, as used for every stroke the renderer issues.
    pub fn round(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            cap: LineCap::Round,
        }
    }
}

/// A mutable square raster the drawing session paints into.
///
/// Implementations must treat [`resize`](CanvasSurface::resize) as
/// destructive: no pixel survives a resize.
pub trait CanvasSurface {
    /// Current side length in pixels (the surface is always square).
    fn side(&self) -> u32;

    /// Wipes every pixel to transparent.
    fn clear(&mut self) -> Result<(), CanvasError>;

    /// Replaces the raster with an empty `side` x `side` one.
    fn resize(&mut self, side: u32) -> Result<(), CanvasError>;

    fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle)
    -> Result<(), CanvasError>;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError>;

    /// Strokes a rectangle outline; negative extents draw away from `corner`.
    fn stroke_rect(
        &mut self,
        corner: Point,
        width: f64,
        height: f64,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError>;

    /// Fills `text` with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        color: Color,
        font: &FontDescriptor,
    ) -> Result<(), CanvasError>;

    /// Encodes the current raster as PNG bytes.
    fn export_png(&self) -> Result<Vec<u8>, CanvasError>;

    /// Strokes a committed shape outline.
    fn stroke_shape(&mut self, shape: &Shape, style: &StrokeStyle) -> Result<(), CanvasError> {
        match shape {
            Shape::Circle { center, radius } => self.stroke_circle(*center, *radius, style),
            Shape::Rect {
                corner,
                width,
                height,
            } => self.stroke_rect(*corner, *width, *height, style),
        }
    }
}
