//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which set of mode controls the canvas offers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CanvasVariant {
    /// Freehand, eraser, circle and rectangle
    #[default]
    Shapes,
    /// Freehand, eraser and text stamps
    Text,
}

impl fmt::Display for CanvasVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasVariant::Shapes => f.write_str("shapes"),
            CanvasVariant::Text => f.write_str("text"),
        }
    }
}

impl FromStr for CanvasVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shapes" => Ok(CanvasVariant::Shapes),
            "text" => Ok(CanvasVariant::Text),
            other => Err(format!(
                "unknown canvas variant '{other}' (expected 'shapes' or 'text')"
            )),
        }
    }
}

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Hex color, as a color picker reports it
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Parses the specification without falling back.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color_input(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`], or `fallback` with a
    /// warning when the name is not recognized.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback.to_hex());
            fallback
        })
    }

    /// Converts the color specification to a [`Color`], defaulting to black.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_spec_accepts_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("white".into()).to_color(), WHITE);
        assert_eq!(ColorSpec::Name("#ff0000".into()).to_color(), RED);
        assert_eq!(ColorSpec::Rgb([0, 0, 255]).to_color(), BLUE);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let spec = ColorSpec::Name("mauve-ish".into());
        assert!(spec.try_to_color().is_none());
        assert_eq!(spec.to_color(), BLACK);
        assert_eq!(spec.to_color_or(WHITE), WHITE);
    }

    #[test]
    fn test_variant_parses_case_insensitively() {
        assert_eq!("Text".parse::<CanvasVariant>(), Ok(CanvasVariant::Text));
        assert_eq!("shapes".parse::<CanvasVariant>(), Ok(CanvasVariant::Shapes));
        assert!("layers".parse::<CanvasVariant>().is_err());
    }
}
