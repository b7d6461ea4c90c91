//! Configuration type definitions.

use super::enums::{CanvasVariant, ColorSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush and text defaults.
///
/// Controls the brush the canvas starts with. Users change width and color
/// at runtime through the brush inputs.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial brush color - a named color, a `#rrggbb` string, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Font family for text stamps (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", or 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size for text stamps in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
        }
    }
}

/// Canvas surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Side length applied at startup, in pixels
    #[serde(default = "default_canvas_size")]
    pub default_size: u32,

    /// Side lengths offered by the size selector
    #[serde(default = "default_size_options")]
    pub size_options: Vec<u32>,

    /// Page background; the eraser paints with this color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Mode controls to offer (shapes or text)
    #[serde(default)]
    pub variant: CanvasVariant,

    /// Redraw the pending circle/rectangle on every pointer move instead of
    /// only when the pointer is released
    #[serde(default)]
    pub live_shape_preview: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_size: default_canvas_size(),
            size_options: default_size_options(),
            background_color: default_background_color(),
            variant: CanvasVariant::default(),
            live_shape_preview: false,
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (`~` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name used for every export
    #[serde(default = "default_export_filename")]
    pub filename: String,

    /// Use `filename_template` instead of the fixed file name
    #[serde(default)]
    pub timestamped: bool,

    /// chrono format string for timestamped exports (".png" is appended)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename: default_export_filename(),
            timestamped: false,
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    5.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    24.0
}

fn default_canvas_size() -> u32 {
    500
}

fn default_size_options() -> Vec<u32> {
    vec![300, 500, 800]
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("#ffffff".to_string())
}

fn default_export_directory() -> String {
    "~/Pictures/CanvasArt".to_string()
}

pub(crate) fn default_export_filename() -> String {
    "canvas_art.png".to_string()
}

fn default_filename_template() -> String {
    "canvas_art_%Y-%m-%d_%H%M%S".to_string()
}
