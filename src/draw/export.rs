//! PNG export for surface snapshots.

use chrono::Local;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a snapshot.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes a snapshot losslessly as PNG bytes (RGBA, background pre-filled).
pub fn encode_png(snapshot: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    snapshot.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Saves a snapshot as a PNG file, creating parent directories as needed.
///
/// # Arguments
/// * `snapshot` - Surface content from [`crate::draw::Canvas::snapshot`]
/// * `path` - Destination file path
pub fn save_png(snapshot: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::info!("Creating export directory: {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    snapshot.save_with_format(path, ImageFormat::Png)?;
    log::info!("Snapshot saved to {}", path.display());
    Ok(())
}

/// Generates a timestamped default filename, e.g. `drawing_2025-08-23_141233.png`.
pub fn default_filename() -> PathBuf {
    let now = Local::now();
    PathBuf::from(format!("{}.png", now.format("drawing_%Y-%m-%d_%H%M%S")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Canvas;

    #[test]
    fn encode_produces_png_magic() {
        let canvas = Canvas::new(8, 8);
        let bytes = encode_png(&canvas.snapshot()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn save_writes_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("drawing.png");

        let canvas = Canvas::new(16, 9);
        save_png(&canvas.snapshot(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 9));
        assert_eq!(decoded.as_raw(), canvas.snapshot().as_raw());
    }

    #[test]
    fn default_filename_is_png() {
        let name = default_filename();
        let name = name.to_string_lossy();
        assert!(name.starts_with("drawing_"));
        assert!(name.ends_with(".png"));
    }
}
