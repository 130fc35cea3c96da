// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[overlay]` - Scroll lock label, transition delays, backdrop dismissal
//! - `[toast]` - Toast position, default duration and concurrency bound
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_LAYERS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_layers::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.max = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::{Position, ToastSettings};
use crate::ui::overlay::OverlaySettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Overlay stack settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Label of the scroll lock held while any overlay is open.
    #[serde(default = "default_body_lock_class", skip_serializing_if = "Option::is_none")]
    pub body_lock_class: Option<String>,

    /// Milliseconds before an alert receives its opening transition.
    #[serde(
        default = "default_alert_open_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub alert_open_delay_ms: Option<u64>,

    /// Milliseconds before a full-page panel receives its opening transition.
    #[serde(
        default = "default_full_open_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_open_delay_ms: Option<u64>,

    /// Milliseconds before a closed full-page panel leaves the layout.
    #[serde(
        default = "default_full_close_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_close_delay_ms: Option<u64>,

    /// Whether clicking an alert's backdrop closes it.
    #[serde(default = "default_alert_dim_close", skip_serializing_if = "Option::is_none")]
    pub alert_dim_close: Option<bool>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            body_lock_class: default_body_lock_class(),
            alert_open_delay_ms: default_alert_open_delay_ms(),
            full_open_delay_ms: default_full_open_delay_ms(),
            full_close_delay_ms: default_full_close_delay_ms(),
            alert_dim_close: default_alert_dim_close(),
        }
    }
}

impl OverlayConfig {
    /// Resolves the section into runtime settings, clamping delays.
    #[must_use]
    pub fn settings(&self) -> OverlaySettings {
        OverlaySettings {
            body_lock_class: self
                .body_lock_class
                .clone()
                .unwrap_or_else(|| DEFAULT_BODY_LOCK_CLASS.to_string()),
            alert_open_delay: clamp_delay(self.alert_open_delay_ms, DEFAULT_ALERT_OPEN_DELAY_MS),
            full_open_delay: clamp_delay(self.full_open_delay_ms, DEFAULT_FULL_OPEN_DELAY_MS),
            full_close_delay: clamp_delay(self.full_close_delay_ms, DEFAULT_FULL_CLOSE_DELAY_MS),
            alert_dim_close: self.alert_dim_close.unwrap_or(DEFAULT_ALERT_DIM_CLOSE),
        }
    }
}

/// Toast queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Edge the toast container is anchored to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Default display duration in milliseconds.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,

    /// Number of toasts visible at once.
    #[serde(default = "default_toast_max", skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: Some(Position::default()),
            duration_ms: default_toast_duration_ms(),
            max: default_toast_max(),
        }
    }
}

impl ToastConfig {
    /// Resolves the section into runtime settings.
    ///
    /// A zero duration falls back to the default and longer ones are capped
    /// at `MAX_TOAST_DURATION_MS`. `max` has no upper bound; values below
    /// `MIN_TOAST_MAX` are raised to it.
    #[must_use]
    pub fn settings(&self) -> ToastSettings {
        let duration_ms = self
            .duration_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .min(MAX_TOAST_DURATION_MS);

        ToastSettings {
            position: self.position.unwrap_or_default(),
            default_duration: Duration::from_millis(duration_ms),
            max: self
                .max
                .unwrap_or(DEFAULT_TOAST_MAX)
                .max(MIN_TOAST_MAX),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Overlay stack settings.
    #[serde(default)]
    pub overlay: OverlayConfig,

    /// Toast queue settings.
    #[serde(default)]
    pub toast: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_body_lock_class() -> Option<String> {
    Some(DEFAULT_BODY_LOCK_CLASS.to_string())
}

fn default_alert_open_delay_ms() -> Option<u64> {
    Some(DEFAULT_ALERT_OPEN_DELAY_MS)
}

fn default_full_open_delay_ms() -> Option<u64> {
    Some(DEFAULT_FULL_OPEN_DELAY_MS)
}

fn default_full_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_FULL_CLOSE_DELAY_MS)
}

fn default_alert_dim_close() -> Option<bool> {
    Some(DEFAULT_ALERT_DIM_CLOSE)
}

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_toast_max() -> Option<usize> {
    Some(DEFAULT_TOAST_MAX)
}

fn clamp_delay(value: Option<u64>, default: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).min(MAX_OVERLAY_DELAY_MS))
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("Settings could not be read, defaults are in use".to_string()),
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
