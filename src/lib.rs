//! Drawing canvas with a mode controller and a stroke/shape renderer.
//!
//! The library holds everything the `canvas-art` binary uses so that other
//! hosts (and the integration tests) can drive a [`DrawingSession`] with
//! their own surface, export sink or error sink.

pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
pub use error::CanvasError;
pub use session::DrawingSession;
