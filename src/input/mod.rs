//! Input handling: mode controller and stroke/shape state machine.
//!
//! This module translates host UI events into drawing actions. The
//! [`ModeController`] owns the active [`DrawingMode`] and its control
//! indicators; the [`StrokeRenderer`] turns pointer events into paint
//! commands for the current mode.

pub mod controller;
pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use controller::{ModeController, ModeFlags, ModeIndicators};
pub use events::UiEvent;
pub use mode::DrawingMode;
pub use state::{BrushConfig, DrawingState, StrokeRenderer};
