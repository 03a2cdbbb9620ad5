// SPDX-License-Identifier: MPL-2.0
//! Persistent settings stored in `settings.toml`.
//!
//! The file has four tables, all optional:
//!
//! - `[general]`: tick interval of the host timer
//! - `[alerts]`: default alert lifetime and removal history size
//! - `[intake]`: upload policy (accepted types, size and count limits)
//! - `[simulation]`: live-feed detection rate
//!
//! Missing keys take their defaults. The directory is resolved by
//! [`paths`] (explicit override, `--config-dir`, `CRIMEWATCH_CONFIG_DIR`,
//! platform config directory).
//!
//! ```no_run
//! use crimewatch::config;
//!
//! let (mut config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! config.intake.max_batch_size = 10;
//! config::save(&config).expect("settings directory is writable");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::alert::{DetectionPeriod, HistoryCapacity, TickInterval};
use crate::domain::intake::IntakePolicy;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning returned by [`load`] when an existing file could not be parsed.
pub const CONFIG_LOAD_WARNING: &str = "Settings file is invalid, using defaults.";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Interval between alert ticks in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Alert lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlertsConfig {
    /// Lifetime of alerts that don't set their own, in milliseconds.
    pub default_lifetime_ms: u64,

    /// Number of removed alerts kept for the recent-alerts list.
    pub history_capacity: usize,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            default_lifetime_ms: DEFAULT_ALERT_LIFETIME_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Upload policy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntakeConfig {
    /// MIME types accepted for upload.
    pub accepted_mime_types: Vec<String>,

    /// Largest accepted file in bytes.
    pub max_file_size_bytes: u64,

    /// Maximum number of files in a pending batch.
    pub max_batch_size: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted_mime_types: default_accepted_mime_types(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

/// Live-feed simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Whether the detection feed runs at all.
    pub enabled: bool,

    /// Seconds between two detection rolls.
    pub period_secs: u64,

    /// Probability (0.0 to 1.0) that a roll raises a detection.
    pub chance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            period_secs: DEFAULT_DETECTION_PERIOD_SECS,
            chance: DEFAULT_DETECTION_CHANCE,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Returns the intake policy described by the `[intake]` section.
    #[must_use]
    pub fn intake_policy(&self) -> IntakePolicy {
        IntakePolicy::new(
            self.intake.accepted_mime_types.iter().cloned(),
            self.intake.max_file_size_bytes,
            self.intake.max_batch_size,
        )
    }

    /// Returns the clamped tick interval.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        TickInterval::new(self.general.tick_interval_ms)
    }

    /// Returns the clamped history capacity.
    #[must_use]
    pub fn history_capacity(&self) -> HistoryCapacity {
        HistoryCapacity::new(self.alerts.history_capacity)
    }

    /// Returns the default alert lifetime.
    #[must_use]
    pub fn default_alert_lifetime(&self) -> Duration {
        Duration::from_millis(self.alerts.default_lifetime_ms)
    }

    /// Returns the clamped detection roll period.
    #[must_use]
    pub fn detection_period(&self) -> DetectionPeriod {
        DetectionPeriod::new(self.simulation.period_secs)
    }
}

fn settings_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Reads settings from the resolved config directory.
///
/// A missing file yields the defaults silently. An unreadable or invalid
/// file yields the defaults plus [`CONFIG_LOAD_WARNING`].
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Same as [`load`], reading from `base_dir` when given.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_file(base_dir).filter(|p| p.exists()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
            (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()))
        }
    }
}

/// Parses the settings file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Writes settings to the resolved config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Same as [`save`], writing under `base_dir` when given.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = settings_file(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let rendered = toml::to_string_pretty(config)?;
    fs::write(path, rendered)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
