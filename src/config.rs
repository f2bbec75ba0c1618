//! Runtime configuration.
//!
//! Read once at startup from `garnet.json` (or the file named by
//! `GARNET_CONFIG`). Every field is optional; anything missing keeps its
//! default, and a broken file falls back to defaults entirely.

use crate::constants::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked for in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "garnet.json";
/// Environment variable that overrides the config path
pub const CONFIG_PATH_ENV: &str = "GARNET_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub master_volume: f32,
    pub music_volume: f32,
    /// Root of the fonts/, sounds/ and sprites/ directories
    pub asset_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_DEFAULT_WIDTH,
            window_height: WINDOW_DEFAULT_HEIGHT,
            target_fps: TARGET_FPS,
            master_volume: 1.0,
            music_volume: 0.5,
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl GameConfig {
    /// Parse a config file's contents
    pub fn from_json(path: &Path, json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Read a config file. A missing file is not an error: it yields None.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(path, &json).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load the config for this run, falling back to defaults
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        match Self::read(&path) {
            Ok(Some(config)) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("{}; using default config", e);
                Self::default()
            }
        }
    }

    /// Clamp values into usable ranges
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.target_fps = self.target_fps.max(1);
        self.window_width = self.window_width.max(1);
        self.window_height = self.window_height.max(1);
        self
    }

    pub fn font_path(&self, file: &str) -> PathBuf {
        self.asset_dir.join("fonts").join(file)
    }

    pub fn sound_path(&self, file: &str) -> PathBuf {
        self.asset_dir.join("sounds").join(file)
    }

    pub fn sprite_path(&self, file: &str) -> PathBuf {
        self.asset_dir.join("sprites").join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_json(Path::new("t.json"), r#"{ "music_volume": 0.2 }"#).unwrap();
        assert_eq!(config.music_volume, 0.2);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_values_are_clamped() {
        let json = r#"{ "master_volume": 3.0, "music_volume": -1.0, "target_fps": 0 }"#;
        let config = GameConfig::from_json(Path::new("t.json"), json).unwrap();
        assert_eq!(config.master_volume, 1.0);
        assert_eq!(config.music_volume, 0.0);
        assert_eq!(config.target_fps, 1);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let err = GameConfig::from_json(Path::new("bad.json"), "{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = Path::new("definitely/not/here/garnet.json");
        assert!(matches!(GameConfig::read(path), Ok(None)));
    }

    #[test]
    fn test_asset_paths() {
        let config = GameConfig::default();
        assert_eq!(config.sound_path("deny.wav"), PathBuf::from("assets/sounds/deny.wav"));
        assert_eq!(config.font_path("OldLondon.ttf"), PathBuf::from("assets/fonts/OldLondon.ttf"));
    }
}
