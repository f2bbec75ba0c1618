//! Asset loading.
//!
//! Every loader returns a `Result`. Callers decide on the fallback (a silent
//! cue, the default font, a drawn sprite) and log the failure once.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Font used for every heading and label
pub const BLOOD_FONT_FILE: &str = "OldLondon.ttf";
/// Sprite shown on the title screen
pub const TITLE_SPRITE_FILE: &str = "title_garnet.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Read a whole asset file into memory
pub fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a sprite as an egui image, scaled to `size` x `size` pixels
pub fn load_sprite(path: &Path, size: u32) -> Result<egui::ColorImage, AssetError> {
    let img = image::open(path)
        .map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .resize_exact(size, size, image::imageops::FilterType::Triangle)
        .into_rgba8();
    let dimensions = [img.width() as usize, img.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(dimensions, img.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_is_io_error() {
        let err = read_asset(Path::new("assets/nope/missing.wav")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("missing.wav"));
    }

    #[test]
    fn test_missing_sprite_is_image_error() {
        let err = load_sprite(Path::new("assets/nope/missing.png"), 300).unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));
    }
}
