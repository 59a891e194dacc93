// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's persisted preferences, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Which controls the viewer shows, thumbnail size, settle delay
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.viewer.show_edit_button = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Viewer defaults applied when a host does not override them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerSection {
    #[serde(
        default = "default_show_comment_box",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_comment_box: Option<bool>,

    #[serde(
        default = "default_show_save_button",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_save_button: Option<bool>,

    #[serde(
        default = "default_show_edit_button",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_edit_button: Option<bool>,

    /// Edge length in pixels requested for grid thumbnails.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,

    /// Pause between upload completion and auto-dismiss, in milliseconds.
    #[serde(
        default = "default_settle_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_delay_ms: Option<u64>,
}

impl Default for ViewerSection {
    fn default() -> Self {
        Self {
            show_comment_box: default_show_comment_box(),
            show_save_button: default_show_save_button(),
            show_edit_button: default_show_edit_button(),
            thumbnail_size: default_thumbnail_size(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl ViewerSection {
    /// Thumbnail edge length, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Settle delay, clamped to the supported range.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(
            self.settle_delay_ms
                .unwrap_or(DEFAULT_SETTLE_DELAY_MS)
                .clamp(MIN_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerSection,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_show_comment_box() -> Option<bool> {
    Some(DEFAULT_SHOW_COMMENT_BOX)
}

fn default_show_save_button() -> Option<bool> {
    Some(DEFAULT_SHOW_SAVE_BUTTON)
}

fn default_show_edit_button() -> Option<bool> {
    Some(DEFAULT_SHOW_EDIT_BUTTON)
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
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

// =============================================================================
// Tests
// =============================================================================
