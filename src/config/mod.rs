// SPDX-License-Identifier: MPL-2.0
//! Loading and saving banner preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[banner]` - Timing, message line cap and background style
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, then `--config-dir`, then the
//! `NOTIFICATION_BANNER_CONFIG_DIR` environment variable, then the platform
//! config directory.
//!
//! # Examples
//!
//! ```no_run
//! use notification_banner::config::{self, BackgroundStyle};
//!
//! let (mut config, _warning) = config::load();
//! config.banner.background = Some(BackgroundStyle::Dark);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Background material behind the banner card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    Light,
    #[default]
    ExtraLight,
    Dark,
    Translucent,
}

impl BackgroundStyle {
    pub const ALL: [BackgroundStyle; 4] = [
        BackgroundStyle::Light,
        BackgroundStyle::ExtraLight,
        BackgroundStyle::Dark,
        BackgroundStyle::Translucent,
    ];

    /// Kebab-case name, as written in `settings.toml`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BackgroundStyle::Light => "light",
            BackgroundStyle::ExtraLight => "extra-light",
            BackgroundStyle::Dark => "dark",
            BackgroundStyle::Translucent => "translucent",
        }
    }

    /// Parses the kebab-case name used in `settings.toml` and on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(BackgroundStyle::Light),
            "extra-light" => Some(BackgroundStyle::ExtraLight),
            "dark" => Some(BackgroundStyle::Dark),
            "translucent" => Some(BackgroundStyle::Translucent),
            _ => None,
        }
    }
}

/// Banner timing and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Seconds before an untouched banner dismisses itself.
    #[serde(
        default = "default_appearing_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub appearing_secs: Option<f32>,

    /// Entrance and exit slide duration in milliseconds.
    #[serde(
        default = "default_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_ms: Option<u32>,

    /// Slide-back duration after an aborted swipe, in milliseconds.
    #[serde(
        default = "default_return_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_animation_ms: Option<u32>,

    /// Maximum number of message lines before truncation.
    #[serde(
        default = "default_message_lines",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_lines: Option<u32>,

    /// Card background material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStyle>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            appearing_secs: default_appearing_secs(),
            animation_ms: default_animation_ms(),
            return_animation_ms: default_return_animation_ms(),
            message_lines: default_message_lines(),
            background: Some(BackgroundStyle::default()),
        }
    }
}

impl BannerConfig {
    /// Auto-dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn appearing_duration(&self) -> Duration {
        let secs = self
            .appearing_secs
            .filter(|s| s.is_finite())
            .unwrap_or(DEFAULT_APPEARING_SECS)
            .clamp(MIN_APPEARING_SECS, MAX_APPEARING_SECS);
        Duration::from_secs_f32(secs)
    }

    /// Entrance/exit duration, clamped to the supported range.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        clamp_ms(self.animation_ms.unwrap_or(DEFAULT_ANIMATION_MS))
    }

    /// Return-to-rest duration, clamped to the supported range.
    #[must_use]
    pub fn return_animation_duration(&self) -> Duration {
        clamp_ms(
            self.return_animation_ms
                .unwrap_or(DEFAULT_RETURN_ANIMATION_MS),
        )
    }

    /// Message line cap, clamped to the supported range.
    #[must_use]
    pub fn message_line_limit(&self) -> u32 {
        self.message_lines
            .unwrap_or(DEFAULT_MESSAGE_LINES)
            .clamp(MIN_MESSAGE_LINES, MAX_MESSAGE_LINES)
    }

    #[must_use]
    pub fn background_style(&self) -> BackgroundStyle {
        self.background.unwrap_or_default()
    }
}

fn clamp_ms(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms.clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS)))
}

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub banner: BannerConfig,
}

fn default_appearing_secs() -> Option<f32> {
    Some(DEFAULT_APPEARING_SECS)
}

fn default_animation_ms() -> Option<u32> {
    Some(DEFAULT_ANIMATION_MS)
}

fn default_return_animation_ms() -> Option<u32> {
    Some(DEFAULT_RETURN_ANIMATION_MS)
}

fn default_message_lines() -> Option<u32> {
    Some(DEFAULT_MESSAGE_LINES)
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            banner: BannerConfig {
                appearing_secs: Some(8.0),
                animation_ms: Some(500),
                return_animation_ms: Some(150),
                message_lines: Some(2),
                background: Some(BackgroundStyle::Dark),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[banner\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("[banner]\nbackground = \"dark\"\n").expect("parse");
        assert_eq!(config.banner.background, Some(BackgroundStyle::Dark));
        assert_eq!(config.banner.animation_ms, Some(DEFAULT_ANIMATION_MS));
        assert_eq!(config.banner.message_lines, Some(DEFAULT_MESSAGE_LINES));
    }

    #[test]
    fn durations_are_clamped() {
        let banner = BannerConfig {
            appearing_secs: Some(0.0),
            animation_ms: Some(100_000),
            return_animation_ms: Some(1),
            message_lines: Some(99),
            background: None,
        };
        assert_eq!(
            banner.appearing_duration(),
            Duration::from_secs_f32(MIN_APPEARING_SECS)
        );
        assert_eq!(
            banner.animation_duration(),
            Duration::from_millis(u64::from(MAX_ANIMATION_MS))
        );
        assert_eq!(
            banner.return_animation_duration(),
            Duration::from_millis(u64::from(MIN_ANIMATION_MS))
        );
        assert_eq!(banner.message_line_limit(), MAX_MESSAGE_LINES);
        assert_eq!(banner.background_style(), BackgroundStyle::ExtraLight);
    }

    #[test]
    fn non_finite_appearing_secs_uses_default() {
        let banner = BannerConfig {
            appearing_secs: Some(f32::NAN),
            ..BannerConfig::default()
        };
        assert_eq!(
            banner.appearing_duration(),
            Duration::from_secs_f32(DEFAULT_APPEARING_SECS)
        );
    }

    #[test]
    fn background_style_parses_kebab_names() {
        for style in BackgroundStyle::ALL {
            let name = toml::Value::try_from(style)
                .expect("serialize")
                .as_str()
                .map(str::to_owned)
                .expect("string");
            assert_eq!(BackgroundStyle::from_name(&name), Some(style));
            assert_eq!(style.name(), name);
        }
        assert_eq!(BackgroundStyle::from_name("neon"), None);
    }
}
