//! Writing exported PNG images to disk.

use crate::config::ExportConfig;
use crate::error::CanvasError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved settings for file exports.
#[derive(Debug, Clone)]
pub struct FileExportConfig {
    /// Directory to write images to.
    pub directory: PathBuf,
    /// Fixed file name used when `timestamp_template` is `None`.
    pub filename: String,
    /// chrono format string for timestamped names (".png" is appended).
    pub timestamp_template: Option<String>,
}

impl Default for FileExportConfig {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for FileExportConfig {
    fn from(config: &ExportConfig) -> Self {
        Self {
            directory: expand_tilde(&config.directory),
            filename: config.filename.clone(),
            timestamp_template: config
                .timestamped
                .then(|| config.filename_template.clone()),
        }
    }
}

impl FileExportConfig {
    /// File name the next export will use.
    pub fn resolve_filename(&self) -> String {
        match &self.timestamp_template {
            Some(template) => generate_filename(template, "png"),
            None => self.filename.clone(),
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, CanvasError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save PNG bytes under `filename` in the configured directory.
///
/// An existing file with the same name is overwritten.
///
/// # Returns
/// Path to the saved file
pub fn save_image(
    image_data: &[u8],
    filename: &str,
    config: &FileExportConfig,
) -> Result<PathBuf, CanvasError> {
    let directory = ensure_directory_exists(&config.directory)?;
    let file_path = directory.join(filename);

    log::info!(
        "Saving canvas to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("canvas_%Y%m%d", "png");
        assert!(filename.starts_with("canvas_"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "canvas_20260101.png".len());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_config_uses_fixed_name() {
        let config = FileExportConfig::default();
        assert_eq!(config.resolve_filename(), "canvas_art.png");
        assert!(config.directory.to_string_lossy().contains("CanvasArt"));
    }

    #[test]
    fn test_timestamped_config() {
        let export = ExportConfig {
            timestamped: true,
            filename_template: "art_%Y".to_string(),
            ..ExportConfig::default()
        };
        let config = FileExportConfig::from(&export);
        let name = config.resolve_filename();
        assert!(name.starts_with("art_2"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_save_image_creates_directory_and_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let config = FileExportConfig {
            directory: temp.path().join("nested").join("out"),
            filename: "canvas_art.png".to_string(),
            timestamp_template: None,
        };

        let first = save_image(&[1, 2, 3], "canvas_art.png", &config).unwrap();
        let second = save_image(&[4, 5], "canvas_art.png", &config).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), vec![4, 5]);
    }
}
