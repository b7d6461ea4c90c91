//! Image export: handing encoded canvas content to its destination.
//!
//! The session encodes the canvas as PNG and passes the bytes to an
//! [`ExportSink`]. The default sink writes `canvas_art.png` into the
//! configured directory; tests swap in their own sink.

pub mod file;

pub use file::FileExportConfig;

use crate::error::CanvasError;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Abstraction over where exported images go.
pub trait ExportSink {
    /// Stores `image_data` and returns where it ended up.
    fn export(&mut self, image_data: &[u8]) -> Result<PathBuf, CanvasError>;
}

/// Writes exports into a directory on disk.
#[derive(Debug, Clone, Default)]
pub struct FileExporter {
    pub config: FileExportConfig,
}

impl FileExporter {
    pub fn new(config: FileExportConfig) -> Self {
        Self { config }
    }
}

impl ExportSink for FileExporter {
    fn export(&mut self, image_data: &[u8]) -> Result<PathBuf, CanvasError> {
        let filename = self.config.resolve_filename();
        file::save_image(image_data, &filename, &self.config)
    }
}

/// Keeps exported images in memory.
///
/// Clones share the same buffer, so a handle kept by the caller sees what
/// the session exported.
#[derive(Debug, Clone, Default)]
pub struct MemoryExporter {
    exports: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl MemoryExporter {
    /// Images exported so far, oldest first.
    pub fn exports(&self) -> Vec<Vec<u8>> {
        self.exports.borrow().clone()
    }
}

impl ExportSink for MemoryExporter {
    fn export(&mut self, image_data: &[u8]) -> Result<PathBuf, CanvasError> {
        self.exports.borrow_mut().push(image_data.to_vec());
        Ok(PathBuf::from(crate::config::types::default_export_filename()))
    }
}
