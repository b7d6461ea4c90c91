//! Error type shared by every canvas operation.

use thiserror::Error;

/// Reasons a canvas operation can be rejected.
///
/// All variants are "invalid operation" failures in the sense that the
/// session reports them and carries on; none of them end the session.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid drawing mode: '{0}'")]
    InvalidMode(String),

    #[error("Invalid button mode: '{0}'")]
    InvalidButtonMode(String),

    #[error("Invalid canvas size: {0}")]
    InvalidSize(String),

    #[error("Invalid brush width: {0}")]
    InvalidBrushWidth(String),

    #[error("Invalid brush color: '{0}'")]
    InvalidColor(String),

    #[error("No text anchor: {0}")]
    NoTextAnchor(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
