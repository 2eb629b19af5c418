//! Configuration management for tray-clock.
//!
//! Reads an optional TOML file from the platform config directory. The file
//! is never written; a missing or unreadable file means defaults.

use crate::{
    AppError, AppResult,
    config::{DisplayConfig, ProgressIconConfig},
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{info, instrument, warn};
use tray_clock_core::ProgressIconStyle;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Tray display settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Progress ring icon settings.
    #[serde(default)]
    pub progress_icon: ProgressIconConfig,
}

impl Config {
    /// Load configuration from disk, falling back to defaults.
    ///
    /// Never fails: problems with the file are logged and defaults are used
    /// so the clock always starts.
    #[instrument]
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!(error = ?e, "No config directory, using defaults");
                return Self::default();
            }
        };

        if !config_path.exists() {
            info!(config_path = ?config_path, "No config found, using defaults");
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => {
                info!(config_path = ?config_path, "Configuration loaded");
                config
            }
            Err(e) => {
                warn!(config_path = ?config_path, error = ?e, "Invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Read and parse a configuration file.
    #[track_caller]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::parse(&contents)
    }

    /// Parse configuration from TOML text. Missing fields take defaults.
    #[track_caller]
    ///
    /// Out-of-range values are logged and replaced by their defaults.
    pub fn parse(contents: &str) -> AppResult<Self> {
        let mut config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.progress_icon.clamp_to_supported();

        Ok(config)
    }

    /// Progress ring style derived from this configuration.
    pub fn icon_style(&self) -> ProgressIconStyle {
        ProgressIconStyle::with_size(self.progress_icon.size)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "tray-clock", "Tray-Clock").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
