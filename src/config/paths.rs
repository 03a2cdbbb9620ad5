// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! First match wins:
//!
//! 1. the `override_path` argument of the `_with_override` functions
//! 2. `--config-dir`, recorded once by [`init_cli_override`]
//! 3. the [`ENV_CONFIG_DIR`] environment variable, when non-empty
//! 4. `<platform config dir>/Crimewatch`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Crimewatch";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CRIMEWATCH_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; returns `false` if an override was
/// already recorded.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Resolves the config directory without an explicit override.
///
/// `None` when no override is set and the platform has no config directory.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Resolves the config directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_config_dir)
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
