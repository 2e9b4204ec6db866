//! Config - Application Configuration
//!
//! Loaded from `language-picker.toml` in the platform config directory.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    PRESS_DURATION_MS, RELEASE_DURATION_MS,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

const CONFIG_FILE: &str = "language-picker.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window width in pixels
    pub window_width: f32,
    /// Window height in pixels
    pub window_height: f32,
    /// Touch-down animation length
    pub press_duration_ms: u64,
    /// Touch-up animation length
    pub release_duration_ms: u64,
    /// Locale for the screen chrome (system locale when unset)
    pub locale: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            press_duration_ms: PRESS_DURATION_MS,
            release_duration_ms: RELEASE_DURATION_MS,
            locale: None,
        }
    }
}

impl AppConfig {
    /// Load config from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    /// Load config, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Using default config");
            Self::default()
        })
    }

    /// Parse a TOML document; an empty document yields the defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        Ok(config.normalized())
    }

    /// Write config back to the config file
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        let value = toml::to_string_pretty(self)?;
        std::fs::write(&path, value)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    /// Clamp window size to the supported minimum
    fn normalized(mut self) -> Self {
        self.window_width = self.window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = self.window_height.max(MIN_WINDOW_HEIGHT);
        self
    }

    pub fn press_duration(&self) -> Duration {
        Duration::from_millis(self.press_duration_ms)
    }

    pub fn release_duration(&self) -> Duration {
        Duration::from_millis(self.release_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("  \n").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.press_duration(), Duration::from_millis(120));
        assert_eq!(config.release_duration(), Duration::from_millis(160));
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_toml("release_duration_ms = 200\nlocale = \"hi\"\n")
            .expect("partial config parses");
        assert_eq!(config.release_duration_ms, 200);
        assert_eq!(config.press_duration_ms, PRESS_DURATION_MS);
        assert_eq!(config.locale.as_deref(), Some("hi"));
    }

    #[test]
    fn test_window_size_clamped() {
        let config = AppConfig::from_toml("window_width = 10.0\nwindow_height = 10.0\n")
            .expect("config parses");
        assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.window_height, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn test_malformed_config() {
        assert!(AppConfig::from_toml("window_width = \"wide\"").is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig {
            locale: Some("bn".to_string()),
            ..AppConfig::default()
        };
        let value = toml::to_string_pretty(&config).expect("serialize");
        assert_eq!(AppConfig::from_toml(&value).expect("parse"), config);
    }
}
