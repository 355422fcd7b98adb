//! Configuration file handling.
//!
//! The file is TOML with a `[display]` and a `[platform]` table. Every key is
//! optional. Command-line flags are applied on top with
//! [`AppConfig::apply_args`].

use crate::args::Args;
use serde::{Deserialize, Serialize};
use slide_display::DisplayConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Platform workaround settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Divide fullscreen geometry by the monitor scale where the backend
    /// double-applies scaling.
    pub scale_workaround: bool,
    /// Force (or forbid) deferring fullscreen until the window is mapped.
    /// Unset means decided by the detected display server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defer_fullscreen: Option<bool>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            scale_workaround: true,
            defer_fullscreen: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub platform: PlatformConfig,
}

impl AppConfig {
    /// `<config dir>/slideview/config.toml` for the current user.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "slideview")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Override file values with command-line flags.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(monitor) = args.monitor {
            self.display.monitor = monitor;
        }
        if args.windowed {
            self.display.windowed = true;
        }
        if let Some(width) = args.width {
            self.display.windowed_width = width;
        }
        if let Some(height) = args.height {
            self.display.windowed_height = height;
        }
        if args.no_scale_workaround {
            self.platform.scale_workaround = false;
        }
    }
}
