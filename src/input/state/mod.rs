mod core;
mod pointer;

pub use core::{BrushConfig, DrawingState, StrokeRenderer};
