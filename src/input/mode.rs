//! Drawing mode selection.

use crate::config::CanvasVariant;
use crate::draw::ShapeKind;
use crate::error::CanvasError;
use std::fmt;
use std::str::FromStr;

/// Drawing mode selection.
///
/// Exactly one mode is active at a time. The mode decides what a pointer
/// drag does to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawingMode {
    /// Continuous stroke in the brush color
    Freehand,
    /// Continuous stroke in the background color
    Eraser,
    /// Circle outline centered on the drag start
    Circle,
    /// Rectangle outline cornered on the drag start
    Rectangle,
    /// Click to place a text anchor, then stamp text there
    Text,
}

impl DrawingMode {
    pub const ALL: [DrawingMode; 5] = [
        DrawingMode::Freehand,
        DrawingMode::Eraser,
        DrawingMode::Circle,
        DrawingMode::Rectangle,
        DrawingMode::Text,
    ];

    /// Identifier used by mode controls and event scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingMode::Freehand => "freehand",
            DrawingMode::Eraser => "eraser",
            DrawingMode::Circle => "circle",
            DrawingMode::Rectangle => "rectangle",
            DrawingMode::Text => "text",
        }
    }

    /// Shape committed on pointer-up, if this is a shape mode.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            DrawingMode::Circle => Some(ShapeKind::Circle),
            DrawingMode::Rectangle => Some(ShapeKind::Rectangle),
            DrawingMode::Freehand | DrawingMode::Eraser | DrawingMode::Text => None,
        }
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawingMode {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CanvasError::InvalidMode(s.to_string()))
    }
}

impl CanvasVariant {
    /// Modes that have a control in this variant, in toolbar order.
    pub fn supported_modes(&self) -> &'static [DrawingMode] {
        match self {
            CanvasVariant::Shapes => &[
                DrawingMode::Freehand,
                DrawingMode::Eraser,
                DrawingMode::Circle,
                DrawingMode::Rectangle,
            ],
            CanvasVariant::Text => &[
                DrawingMode::Freehand,
                DrawingMode::Eraser,
                DrawingMode::Text,
            ],
        }
    }

    pub fn supports(&self, mode: DrawingMode) -> bool {
        self.supported_modes().contains(&mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_parse_to_modes() {
        for mode in DrawingMode::ALL {
            assert_eq!(mode.as_str().parse::<DrawingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_identifier_is_invalid_mode() {
        let err = "spray".parse::<DrawingMode>().unwrap_err();
        assert!(matches!(err, CanvasError::InvalidMode(ref m) if m == "spray"));
        assert!("Freehand".parse::<DrawingMode>().is_err());
    }

    #[test]
    fn test_only_circle_and_rectangle_are_shape_modes() {
        assert_eq!(DrawingMode::Circle.shape_kind(), Some(ShapeKind::Circle));
        assert_eq!(
            DrawingMode::Rectangle.shape_kind(),
            Some(ShapeKind::Rectangle)
        );
        assert_eq!(DrawingMode::Freehand.shape_kind(), None);
        assert_eq!(DrawingMode::Text.shape_kind(), None);
    }

    #[test]
    fn test_variants_expose_their_controls() {
        assert!(CanvasVariant::Shapes.supports(DrawingMode::Circle));
        assert!(!CanvasVariant::Shapes.supports(DrawingMode::Text));
        assert!(CanvasVariant::Text.supports(DrawingMode::Text));
        assert!(!CanvasVariant::Text.supports(DrawingMode::Rectangle));
    }
}
