//! Configuration file support for canvas-art.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/canvas-art/config.toml`. Settings include brush defaults,
//! canvas size and variant, and export location.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{CanvasVariant, ColorSpec};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::{BLACK, Color, FontDescriptor, WHITE, cairo_surface::MAX_SIDE};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#1e90ff"
/// default_width = 8.0
///
/// [canvas]
/// default_size = 800
/// size_options = [400, 800, 1200]
/// variant = "shapes"
/// live_shape_preview = true
///
/// [export]
/// directory = "~/Pictures/CanvasArt"
/// filename = "canvas_art.png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush and text defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size, background and available modes
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Where and how images are exported
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 100.0
    /// - `font_size`: 8.0 - 72.0
    /// - `default_size` and `size_options`: 1 - 8192
    fn validate_and_clamp(&mut self) {
        if !(1.0..=100.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = if self.drawing.default_width.is_nan() {
                1.0
            } else {
                self.drawing.default_width.clamp(1.0, 100.0)
            };
        }

        if !(8.0..=72.0).contains(&self.drawing.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = if self.drawing.font_size.is_nan() {
                8.0
            } else {
                self.drawing.font_size.clamp(8.0, 72.0)
            };
        }

        if !(1..=MAX_SIDE).contains(&self.canvas.default_size) {
            log::warn!(
                "Invalid canvas default_size {}, clamping to 1-{} range",
                self.canvas.default_size,
                MAX_SIDE
            );
            self.canvas.default_size = self.canvas.default_size.clamp(1, MAX_SIDE);
        }

        let before = self.canvas.size_options.len();
        self.canvas
            .size_options
            .retain(|side| (1..=MAX_SIDE).contains(side));
        if self.canvas.size_options.len() != before {
            log::warn!(
                "Dropped {} canvas size option(s) outside 1-{}",
                before - self.canvas.size_options.len(),
                MAX_SIDE
            );
        }
        if !self.canvas.size_options.contains(&self.canvas.default_size) {
            self.canvas.size_options.push(self.canvas.default_size);
            self.canvas.size_options.sort_unstable();
        }

        if self.drawing.default_color.try_to_color().is_none() {
            log::warn!(
                "Invalid default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        if self.canvas.background_color.try_to_color().is_none() {
            log::warn!(
                "Invalid background_color {:?}, falling back to white",
                self.canvas.background_color
            );
            self.canvas.background_color = ColorSpec::Name("white".to_string());
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        let file_name = self.export.filename.trim();
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            log::warn!(
                "Invalid export filename '{}', falling back to '{}'",
                self.export.filename,
                types::default_export_filename()
            );
            self.export.filename = types::default_export_filename();
        }
    }

    /// Brush color the session starts with.
    pub fn brush_color(&self) -> Color {
        self.drawing.default_color.to_color_or(BLACK)
    }

    /// Color the eraser paints with.
    pub fn background_color(&self) -> Color {
        self.canvas.background_color.to_color_or(WHITE)
    }

    /// Font used for text stamps.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
            self.drawing.font_size,
        )
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/canvas-art/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("canvas-art");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    fn parse(toml: &str) -> Config {
        let mut config = Config::from_toml_str(toml).unwrap();
        config.validate_and_clamp();
        config
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("");
        assert_eq!(config.drawing.default_width, 5.0);
        assert_eq!(config.canvas.default_size, 500);
        assert_eq!(config.canvas.variant, CanvasVariant::Shapes);
        assert!(!config.canvas.live_shape_preview);
        assert_eq!(config.export.filename, "canvas_art.png");
        assert_eq!(config.brush_color(), BLACK);
        assert_eq!(config.background_color(), WHITE);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = parse(
            r##"
            [drawing]
            default_color = "#0000ff"
            default_width = 12.5

            [canvas]
            default_size = 640
            size_options = [320, 640]
            variant = "text"
            live_shape_preview = true
            background_color = [255, 0, 0]
            "##,
        );
        assert_eq!(config.brush_color(), BLUE);
        assert_eq!(config.background_color(), RED);
        assert_eq!(config.drawing.default_width, 12.5);
        assert_eq!(config.canvas.default_size, 640);
        assert_eq!(config.canvas.variant, CanvasVariant::Text);
        assert!(config.canvas.live_shape_preview);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = parse(
            r#"
            [drawing]
            default_width = 0.0
            font_size = 500.0
            font_style = "wobbly"

            [canvas]
            default_size = 0
            size_options = [0, 100, 99999]
            "#,
        );
        assert_eq!(config.drawing.default_width, 1.0);
        assert_eq!(config.drawing.font_size, 72.0);
        assert_eq!(config.drawing.font_style, "normal");
        assert_eq!(config.canvas.default_size, 1);
        assert_eq!(config.canvas.size_options, vec![1, 100]);
    }

    #[test]
    fn test_invalid_colors_and_filename_fall_back() {
        let config = parse(
            r##"
            [drawing]
            default_color = "not-a-color"

            [canvas]
            background_color = "#12"

            [export]
            filename = "../escape.png"
            "##,
        );
        assert_eq!(config.brush_color(), BLACK);
        assert_eq!(config.background_color(), WHITE);
        assert_eq!(config.export.filename, "canvas_art.png");
    }

    #[test]
    fn test_unknown_variant_is_a_parse_error() {
        assert!(Config::from_toml_str("[canvas]\nvariant = \"layers\"").is_err());
    }

    #[test]
    fn test_load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas]\ndefault_size = 256\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.default_size, 256);
        assert!(config.canvas.size_options.contains(&256));
    }

    #[test]
    fn test_schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("live_shape_preview"));
    }
}
