// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

use crate::domain::alert::newtypes::{
    detection_period_bounds, history_capacity_bounds, tick_interval_bounds,
};
use crate::domain::alert::DEFAULT_LIFETIME;
use crate::domain::intake;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default interval between two alert ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_interval_bounds::DEFAULT_MS;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = tick_interval_bounds::MIN_MS;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = tick_interval_bounds::MAX_MS;

// ==========================================================================
// Alert Defaults
// ==========================================================================

/// Default alert lifetime (in milliseconds).
#[allow(clippy::cast_possible_truncation)]
pub const DEFAULT_ALERT_LIFETIME_MS: u64 = DEFAULT_LIFETIME.as_millis() as u64;

/// Default number of removed alerts kept in history.
pub const DEFAULT_HISTORY_CAPACITY: usize = history_capacity_bounds::DEFAULT;

/// Minimum history capacity.
pub const MIN_HISTORY_CAPACITY: usize = history_capacity_bounds::MIN;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = history_capacity_bounds::MAX;

// ==========================================================================
// Intake Defaults
// ==========================================================================

/// Default per-file size limit (100 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = intake::DEFAULT_MAX_FILE_SIZE_BYTES;

/// Default pending batch cap.
pub const DEFAULT_MAX_BATCH_SIZE: usize = intake::DEFAULT_MAX_BATCH_SIZE;

/// Default accepted MIME types.
#[must_use]
pub fn default_accepted_mime_types() -> Vec<String> {
    intake::DEFAULT_ACCEPTED_MIME_TYPES
        .iter()
        .map(|m| (*m).to_string())
        .collect()
}

// ==========================================================================
// Simulation Defaults
// ==========================================================================

/// Default probability that a detection roll raises an alert.
pub const DEFAULT_DETECTION_CHANCE: f64 = crate::simulation::DEFAULT_CHANCE;

/// Default time between detection rolls (in seconds).
pub const DEFAULT_DETECTION_PERIOD_SECS: u64 = detection_period_bounds::DEFAULT_SECS;

/// Minimum time between detection rolls (in seconds).
pub const MIN_DETECTION_PERIOD_SECS: u64 = detection_period_bounds::MIN_SECS;

/// Maximum time between detection rolls (in seconds).
pub const MAX_DETECTION_PERIOD_SECS: u64 = detection_period_bounds::MAX_SECS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_bounds_are_ordered() {
        assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
        assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    }

    #[test]
    fn history_bounds_are_ordered() {
        assert!(MIN_HISTORY_CAPACITY <= DEFAULT_HISTORY_CAPACITY);
        assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
    }

    #[test]
    fn alert_lifetime_defaults_to_five_seconds() {
        assert_eq!(DEFAULT_ALERT_LIFETIME_MS, 5000);
    }

    #[test]
    fn detection_period_matches_feed() {
        assert_eq!(
            crate::simulation::DEFAULT_PERIOD.as_secs(),
            DEFAULT_DETECTION_PERIOD_SECS
        );
    }
}
