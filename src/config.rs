//! Configuration file handling for imgscii.
//!
//! Loads configuration from `~/.config/imgscii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file structure for imgscii.
/// Loaded from ~/.config/imgscii/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Target grid width in characters.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Target grid height in rows.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Apply gamma correction before quantization.
    #[serde(default = "default_true")]
    pub gamma: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: default_width(),
            height: default_height(),
            gamma: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PaletteConfig {
    /// Custom glyph string, darkest to brightest.
    /// Overrides the built-in palette when non-empty.
    #[serde(default)]
    pub glyphs: Option<String>,
}

fn default_width() -> u32 {
    150
}

fn default_height() -> u32 {
    256
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("imgscii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/imgscii/config.toml")
        })
}
