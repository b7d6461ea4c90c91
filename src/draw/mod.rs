//! Rendering primitives and the canvas surface (Cairo-based).
//!
//! This module defines the core drawing types used by the canvas:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Circle and rectangle outlines committed by shape modes
//! - [`CanvasSurface`]: the raster target the renderer paints into
//! - [`CairoSurface`]: the image-surface implementation with PNG export

pub mod cairo_surface;
pub mod color;
pub mod font;
#[cfg(test)]
pub(crate) mod recording;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::Color;
pub use font::FontDescriptor;
pub use shape::{Shape, ShapeKind};
pub use surface::{CanvasSurface, LineCap, StrokeStyle};

pub use color::{BLACK, BLUE, RED, WHITE};
