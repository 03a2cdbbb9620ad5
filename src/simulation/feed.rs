// SPDX-License-Identifier: MPL-2.0
//! Simulated live-feed detections.
//!
//! Every `period` of elapsed time the feed rolls once against `chance` and,
//! on a hit, raises one alert drawn uniformly from [`DETECTION_TEMPLATES`].
//! No frames are analysed; this only produces alert traffic for the host.

use crate::domain::alert::{AlertKind, AlertRecord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Time between two detection rolls.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

/// Probability that a roll raises a detection.
pub const DEFAULT_CHANCE: f64 = 0.3;

/// Lifetime of a detection alert.
pub const DETECTION_LIFETIME: Duration = Duration::from_millis(8000);

/// Shortest accepted period.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Shape of a simulated detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionTemplate {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
}

/// Detections the live feed can raise.
pub const DETECTION_TEMPLATES: [DetectionTemplate; 4] = [
    DetectionTemplate {
        kind: AlertKind::Critical,
        title: "Weapon Detected!",
        message: "Gun identified in Parking Lot camera feed.",
    },
    DetectionTemplate {
        kind: AlertKind::Warning,
        title: "Suspicious Activity",
        message: "Unusual movement pattern detected.",
    },
    DetectionTemplate {
        kind: AlertKind::Critical,
        title: "Violence Alert!",
        message: "Aggressive behavior detected in main entrance.",
    },
    DetectionTemplate {
        kind: AlertKind::Warning,
        title: "Crowd Density",
        message: "High crowd density detected in corridor.",
    },
];

/// Random detection producer driven by elapsed time.
#[derive(Debug, Clone)]
pub struct DetectionFeed {
    rng: ChaCha8Rng,
    period: Duration,
    chance: f64,
    pending: Duration,
    raised: u64,
}

impl DetectionFeed {
    /// Creates a feed seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(rand::random()))
    }

    /// Creates a reproducible feed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            period: DEFAULT_PERIOD,
            chance: DEFAULT_CHANCE,
            pending: Duration::ZERO,
            raised: 0,
        }
    }

    /// Sets the time between rolls (at least 1ms).
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period.max(MIN_PERIOD);
        self
    }

    /// Sets the hit probability, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }

    /// Accumulates `elapsed` and returns the detections raised by every
    /// completed period.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<AlertRecord> {
        self.pending = self.pending.saturating_add(elapsed);

        let mut raised = Vec::new();
        while self.pending >= self.period {
            self.pending -= self.period;
            if self.rng.gen_bool(self.chance) {
                let template = DETECTION_TEMPLATES[self.rng.gen_range(0..DETECTION_TEMPLATES.len())];
                self.raised += 1;
                tracing::trace!(title = template.title, "simulated detection");
                raised.push(
                    AlertRecord::with_generated_id(template.kind, template.title, template.message)
                        .with_lifetime(DETECTION_LIFETIME),
                );
            }
        }
        raised
    }

    /// Number of detections raised so far.
    #[must_use]
    pub fn raised(&self) -> u64 {
        self.raised
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for DetectionFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_chance_raises_once_per_period() {
        let mut feed = DetectionFeed::seeded(7).with_chance(1.0);

        assert!(feed.advance(Duration::from_millis(4999)).is_empty());
        let raised = feed.advance(Duration::from_millis(1));
        assert_eq!(raised.len(), 1);

        let raised = feed.advance(Duration::from_secs(15));
        assert_eq!(raised.len(), 3);
        assert_eq!(feed.raised(), 4);
    }

    #[test]
    fn zero_chance_never_raises() {
        let mut feed = DetectionFeed::seeded(7).with_chance(0.0);
        assert!(feed.advance(Duration::from_secs(600)).is_empty());
        assert_eq!(feed.raised(), 0);
    }

    #[test]
    fn detections_use_templates_and_lifetime() {
        let mut feed = DetectionFeed::seeded(42)
            .with_chance(1.0)
            .with_period(Duration::from_millis(10));

        for alert in feed.advance(Duration::from_millis(200)) {
            assert!(matches!(alert.kind(), AlertKind::Critical | AlertKind::Warning));
            assert!(DETECTION_TEMPLATES.iter().any(|t| t.title == alert.title()));
            assert_eq!(alert.lifetime(), DETECTION_LIFETIME);
            assert!(alert.auto_expire());
        }
    }

    #[test]
    fn same_seed_same_detections() {
        let titles = |seed| {
            let mut feed = DetectionFeed::seeded(seed);
            feed.advance(Duration::from_secs(500))
                .iter()
                .map(|a| a.title().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(99), titles(99));
    }

    #[test]
    fn settings_are_clamped() {
        let feed = DetectionFeed::seeded(1)
            .with_period(Duration::ZERO)
            .with_chance(f64::NAN);
        assert_eq!(feed.period(), Duration::from_millis(1));

        let mut feed = feed.with_chance(5.0);
        assert_eq!(feed.advance(Duration::from_millis(3)).len(), 3);
    }
}
