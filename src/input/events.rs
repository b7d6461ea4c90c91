//! UI event types delivered by the host.

use serde::{Deserialize, Serialize};

/// One event from the host UI.
///
/// Pointer coordinates are client (page) coordinates; the session converts
/// them using the last reported canvas offset. Form inputs arrive as the raw
/// strings the controls hold, so malformed values can be reported.
///
/// Scripts use a kebab-case `type` tag:
///
/// ```json
/// [
///   { "type": "set-mode", "mode": "circle" },
///   { "type": "pointer-down", "x": 50, "y": 50 },
///   { "type": "pointer-up", "x": 80, "y": 50 },
///   { "type": "save" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiEvent {
    /// A mode control was clicked
    SetMode { mode: String },
    /// Primary pointer pressed over the canvas
    PointerDown { x: f64, y: f64 },
    /// Pointer moved over the canvas
    PointerMove { x: f64, y: f64 },
    /// Primary pointer released
    PointerUp { x: f64, y: f64 },
    /// The canvas moved on screen; `left`/`top` is its new top-left corner
    CanvasOffset { left: f64, top: f64 },
    /// Clear button
    Clear,
    /// Save button
    Save,
    /// Canvas size selection changed
    Resize { size: String },
    /// Brush size input changed
    BrushWidth { value: String },
    /// Color picker changed
    BrushColor { value: String },
    /// Text entered for the current text anchor
    Text { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_events_use_kebab_case_tags() {
        let events: Vec<UiEvent> = serde_json::from_str(
            r#"[
                {"type": "set-mode", "mode": "eraser"},
                {"type": "pointer-move", "x": 1.5, "y": 2},
                {"type": "brush-width", "value": "12"},
                {"type": "clear"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                UiEvent::SetMode {
                    mode: "eraser".to_string()
                },
                UiEvent::PointerMove { x: 1.5, y: 2.0 },
                UiEvent::BrushWidth {
                    value: "12".to_string()
                },
                UiEvent::Clear,
            ]
        );
    }

    #[test]
    fn test_unknown_event_type_fails_to_parse() {
        let result: Result<UiEvent, _> = serde_json::from_str(r#"{"type": "undo"}"#);
        assert!(result.is_err());
    }
}
