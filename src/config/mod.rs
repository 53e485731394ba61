// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::ui::notifications::Anchor;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Move toasts to the bottom-left corner
//! config.default_anchor = Some(Anchor::BottomLeft);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::Anchor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub default_anchor: Option<Anchor>,
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub exit_grace_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_anchor: Some(Anchor::default()),
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            exit_grace_ms: Some(DEFAULT_EXIT_GRACE_MS),
        }
    }
}

impl Config {
    /// Anchor used for toasts that do not request one explicitly.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.default_anchor.unwrap_or_default()
    }

    /// Display duration used for toasts that do not request one explicitly.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS)
    }

    /// Exit grace period, clamped so persisted configs cannot stall removal.
    #[must_use]
    pub fn exit_grace(&self) -> Duration {
        let ms = self
            .exit_grace_ms
            .unwrap_or(DEFAULT_EXIT_GRACE_MS)
            .clamp(MIN_EXIT_GRACE_MS, MAX_EXIT_GRACE_MS);
        Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            default_anchor: Some(Anchor::BottomLeft),
            default_duration_ms: Some(6000),
            exit_grace_ms: Some(300),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_rejects_unknown_anchor_by_falling_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "default_anchor = \"center\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.anchor(), Anchor::TopRight);
    }

    #[test]
    fn load_from_path_reads_kebab_case_anchor() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "default_anchor = \"bottom-right\"\n")
            .expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.anchor(), Anchor::BottomRight);
        assert_eq!(loaded.duration_ms(), DEFAULT_DURATION_MS);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_config_uses_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.anchor(), Anchor::TopRight);
        assert_eq!(config.duration_ms(), 4000);
        assert_eq!(config.exit_grace(), Duration::from_millis(500));
    }

    #[test]
    fn exit_grace_is_clamped() {
        let config = Config {
            exit_grace_ms: Some(0),
            ..Config::default()
        };
        assert_eq!(config.exit_grace(), Duration::from_millis(MIN_EXIT_GRACE_MS));

        let config = Config {
            exit_grace_ms: Some(u64::MAX),
            ..Config::default()
        };
        assert_eq!(config.exit_grace(), Duration::from_millis(MAX_EXIT_GRACE_MS));
    }
}
