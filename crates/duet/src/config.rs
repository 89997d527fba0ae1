//! Configuration file support
//!
//! Config file location: `~/.config/duet/config.toml` (or the platform
//! equivalent), overridable with `--config`.
//!
//! ```toml
//! context = 5
//! layout = "prefer-side-by-side"
//! color = "auto"
//! width = 120
//! ```

use duet_core::{ColorMode, Layout};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from the config file. Anything left out falls back to
/// the engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub context: Option<usize>,
    pub layout: Option<Layout>,
    pub color: Option<ColorMode>,
    pub width: Option<usize>,
}

impl Config {
    /// Where the config file lives when `--config` is not given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("duet").join("config.toml"))
    }

    /// Load the config. An explicit path must exist; the default one may be
    /// missing, in which case defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
