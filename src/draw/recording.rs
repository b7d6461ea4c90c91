//! Test double that records surface calls instead of rasterizing.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::{CanvasSurface, StrokeStyle};
use crate::error::CanvasError;
use crate::util::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Resize(u32),
    Line {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        style: StrokeStyle,
    },
    Rect {
        corner: Point,
        width: f64,
        height: f64,
        style: StrokeStyle,
    },
    Text {
        origin: Point,
        text: String,
        color: Color,
    },
}

pub struct RecordingSurface {
    pub side: u32,
    pub ops: Vec<SurfaceOp>,
    /// When set, every paint call fails with a render error
    pub fail_paint: bool,
}

impl RecordingSurface {
    pub fn new(side: u32) -> Self {
        Self {
            side,
            ops: Vec::new(),
            fail_paint: false,
        }
    }

    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    fn record(&mut self, op: SurfaceOp) -> Result<(), CanvasError> {
        if self.fail_paint {
            return Err(CanvasError::Render(cairo::Error::NoMemory));
        }
        self.ops.push(op);
        Ok(())
    }
}

impl CanvasSurface for RecordingSurface {
    fn side(&self) -> u32 {
        self.side
    }

    fn clear(&mut self) -> Result<(), CanvasError> {
        self.record(SurfaceOp::Clear)
    }

    fn resize(&mut self, side: u32) -> Result<(), CanvasError> {
        self.side = side;
        self.ops.push(SurfaceOp::Resize(side));
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError> {
        self.record(SurfaceOp::Line {
            from,
            to,
            style: *style,
        })
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError> {
        self.record(SurfaceOp::Circle {
            center,
            radius,
            style: *style,
        })
    }

    fn stroke_rect(
        &mut self,
        corner: Point,
        width: f64,
        height: f64,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError> {
        self.record(SurfaceOp::Rect {
            corner,
            width,
            height,
            style: *style,
        })
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        color: Color,
        _font: &FontDescriptor,
    ) -> Result<(), CanvasError> {
        self.record(SurfaceOp::Text {
            origin,
            text: text.to_string(),
            color,
        })
    }

    fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        Ok(vec![137, 80, 78, 71, 13, 10, 26, 10])
    }
}
