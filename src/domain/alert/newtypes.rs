// SPDX-License-Identifier: MPL-2.0
//! Alert newtypes.
//!
//! This module provides type-safe wrappers for alert settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// History Capacity
// =============================================================================

/// Removal history capacity bounds (1 to 500 entries).
pub mod history_capacity_bounds {
    /// Minimum history capacity.
    pub const MIN: usize = 1;
    /// Maximum history capacity.
    pub const MAX: usize = 500;
    /// Default history capacity.
    pub const DEFAULT: usize = 50;
}

/// Number of removed alerts kept for display in the recent-alerts list.
///
/// Values outside 1–500 are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tick Interval
// =============================================================================

/// Tick interval bounds in milliseconds (10 to 1000).
pub mod tick_interval_bounds {
    /// Minimum interval.
    pub const MIN_MS: u64 = 10;
    /// Maximum interval.
    pub const MAX_MS: u64 = 1000;
    /// Default interval.
    pub const DEFAULT_MS: u64 = 100;
}

/// How often the host advances alert lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(tick_interval_bounds::MIN_MS, tick_interval_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Detection Period
// =============================================================================

/// Detection roll period bounds in seconds (1 to 3600).
pub mod detection_period_bounds {
    /// Minimum period.
    pub const MIN_SECS: u64 = 1;
    /// Maximum period.
    pub const MAX_SECS: u64 = 3600;
    /// Default period.
    pub const DEFAULT_SECS: u64 = 5;
}

/// Time between two rolls of the simulated detection feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionPeriod(u64);

impl DetectionPeriod {
    /// Creates a new period, clamping to valid range.
    #[must_use]
    pub fn new(secs: u64) -> Self {
        Self(secs.clamp(
            detection_period_bounds::MIN_SECS,
            detection_period_bounds::MAX_SECS,
        ))
    }

    /// Returns the period in seconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for DetectionPeriod {
    fn default() -> Self {
        Self(detection_period_bounds::DEFAULT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_capacity_clamps() {
        assert_eq!(HistoryCapacity::new(0).value(), history_capacity_bounds::MIN);
        assert_eq!(
            HistoryCapacity::new(10_000).value(),
            history_capacity_bounds::MAX
        );
        assert_eq!(HistoryCapacity::new(20).value(), 20);
    }

    #[test]
    fn tick_interval_clamps_and_converts() {
        assert_eq!(TickInterval::new(1).value(), tick_interval_bounds::MIN_MS);
        assert_eq!(TickInterval::new(60_000).value(), tick_interval_bounds::MAX_MS);
        assert_eq!(
            TickInterval::default().as_duration(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn detection_period_clamps() {
        assert_eq!(DetectionPeriod::new(0).value(), detection_period_bounds::MIN_SECS);
        assert_eq!(
            DetectionPeriod::new(u64::MAX).value(),
            detection_period_bounds::MAX_SECS
        );
        assert_eq!(DetectionPeriod::default().as_duration(), Duration::from_secs(5));
    }
}
