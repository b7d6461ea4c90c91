use crate::config::{CanvasVariant, Config};
use crate::draw::{Color, FontDescriptor, WHITE};
use crate::input::BrushConfig;

/// Runtime options a [`DrawingSession`](super::DrawingSession) starts from.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub variant: CanvasVariant,
    /// Side length applied at startup
    pub default_size: u32,
    /// Side lengths the size selector offers
    pub size_options: Vec<u32>,
    pub brush: BrushConfig,
    /// Color the eraser paints with
    pub eraser_color: Color,
    pub live_shape_preview: bool,
    pub font: FontDescriptor,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            variant: CanvasVariant::Shapes,
            default_size: 500,
            size_options: vec![300, 500, 800],
            brush: BrushConfig::default(),
            eraser_color: WHITE,
            live_shape_preview: false,
            font: FontDescriptor::default(),
        }
    }
}

impl SessionOptions {
    /// Builds options from a validated configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            variant: config.canvas.variant,
            default_size: config.canvas.default_size,
            size_options: config.canvas.size_options.clone(),
            brush: BrushConfig {
                width: config.drawing.default_width,
                color: config.brush_color(),
            },
            eraser_color: config.background_color(),
            live_shape_preview: config.canvas.live_shape_preview,
            font: config.font_descriptor(),
        }
    }
}
