// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the alert manager, the upload batch and the
//! simulated detection feed together and translates messages into alert
//! traffic. It owns no timer: the host sends [`Message::Tick`] with the
//! time elapsed since the previous tick.

mod driver;
mod message;

pub use driver::run_for;
pub use message::{Flags, Message};

use crate::alerts::AlertManager;
use crate::config::Config;
use crate::domain::alert::AlertRecord;
use crate::domain::intake::{CandidateFile, Rejection};
use crate::error::Result;
use crate::intake::{notices, IntakeSession};
use crate::simulation::DetectionFeed;
use std::time::Duration;

/// Root application state.
#[derive(Debug)]
pub struct App {
    alerts: AlertManager,
    intake: IntakeSession,
    feed: Option<DetectionFeed>,
    /// Lifetime given to alerts raised by intake outcomes.
    alert_lifetime: Duration,
    /// Detections raised since startup.
    detections: u64,
    /// Files handed over for analysis since startup.
    submitted_files: usize,
}

impl App {
    /// Builds the application from its configuration.
    ///
    /// The detection feed is seeded from entropy; use [`App::with_feed`] for
    /// a reproducible one.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let feed = config.simulation.enabled.then(|| {
            DetectionFeed::new()
                .with_period(config.detection_period().as_duration())
                .with_chance(config.simulation.chance)
        });

        Self {
            alerts: AlertManager::with_history_capacity(config.history_capacity()),
            intake: IntakeSession::new(config.intake_policy()),
            feed,
            alert_lifetime: config.default_alert_lifetime(),
            detections: 0,
            submitted_files: 0,
        }
    }

    /// Replaces the detection feed (or disables it with `None`).
    #[must_use]
    pub fn with_feed(mut self, feed: Option<DetectionFeed>) -> Self {
        self.feed = feed;
        self
    }

    /// Applies a message to the application state.
    ///
    /// # Errors
    ///
    /// Returns an intake error when [`Message::RemoveFile`] names a position
    /// outside the pending batch. An empty submission is not an error here;
    /// it raises a "No files selected" alert instead.
    pub fn update(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Tick(elapsed) => self.tick(elapsed),
            Message::FilesOffered(files) => self.offer(&files),
            Message::RemoveFile(index) => {
                let removed = self.intake.remove(index)?;
                tracing::debug!(name = %removed.name, "file removed from batch");
            }
            Message::Submit => self.submit(),
            Message::Alert(message) => self.alerts.handle_message(&message),
        }
        Ok(())
    }

    /// Dismisses every active alert so the view can tear down.
    pub fn shutdown(&mut self) {
        self.alerts.dismiss_all();
    }

    #[must_use]
    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    /// Mutable access, e.g. to register the removal callback.
    pub fn alerts_mut(&mut self) -> &mut AlertManager {
        &mut self.alerts
    }

    #[must_use]
    pub fn intake(&self) -> &IntakeSession {
        &self.intake
    }

    #[must_use]
    pub fn detections(&self) -> u64 {
        self.detections
    }

    #[must_use]
    pub fn submitted_files(&self) -> usize {
        self.submitted_files
    }

    fn tick(&mut self, elapsed: Duration) {
        // Expire first so new detections start with their full lifetime.
        self.alerts.tick(elapsed);

        let Some(feed) = self.feed.as_mut() else {
            return;
        };
        for detection in feed.advance(elapsed) {
            tracing::info!(kind = %detection.kind(), title = detection.title(), "detection raised");
            if self.alerts.add(detection) {
                self.detections += 1;
            }
        }
    }

    fn offer(&mut self, files: &[CandidateFile]) {
        let rejections: Vec<Rejection> = self.intake.offer(files);
        for rejection in &rejections {
            let alert = notices::rejection_alert(rejection, self.intake.policy());
            self.raise(alert);
        }
    }

    fn submit(&mut self) {
        match self.intake.submit() {
            Ok(files) => {
                self.submitted_files += files.len();
                self.raise(notices::submitted_alert(files.len()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission refused");
                self.raise(notices::error_alert(&err));
            }
        }
    }

    fn raise(&mut self, alert: AlertRecord) {
        self.alerts.add(alert.with_lifetime(self.alert_lifetime));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts;
    use crate::domain::alert::AlertKind;
    use crate::domain::error::IntakeError;
    use crate::error::Error;

    fn quiet_app() -> App {
        App::new(&Config::default()).with_feed(None)
    }

    fn kinds(app: &App) -> Vec<AlertKind> {
        app.alerts().active().map(|a| a.record().kind()).collect()
    }

    #[test]
    fn rejected_files_raise_error_alerts() {
        let mut app = quiet_app();
        app.update(Message::FilesOffered(vec![
            CandidateFile::new("ok.png", 10, "image/png"),
            CandidateFile::new("bad.gif", 10, "image/gif"),
            CandidateFile::new("huge.mp4", u64::MAX, "video/mp4"),
        ]))
        .unwrap();

        assert_eq!(app.intake().batch().len(), 1);
        assert_eq!(kinds(&app), vec![AlertKind::Error, AlertKind::Error]);
        let titles: Vec<_> = app.alerts().active().map(|a| a.record().title().to_string()).collect();
        assert_eq!(titles, vec!["Invalid file type", "File too large"]);
    }

    #[test]
    fn submit_raises_success_and_counts_files() {
        let mut app = quiet_app();
        app.update(Message::FilesOffered(vec![
            CandidateFile::new("a.png", 10, "image/png"),
            CandidateFile::new("b.jpg", 10, "image/jpeg"),
        ]))
        .unwrap();
        app.update(Message::Submit).unwrap();

        assert_eq!(app.submitted_files(), 2);
        assert!(app.intake().batch().is_empty());
        assert_eq!(kinds(&app), vec![AlertKind::Success]);
    }

    #[test]
    fn empty_submit_raises_error_alert() {
        let mut app = quiet_app();
        app.update(Message::Submit).unwrap();

        let alert = app.alerts().active().next().unwrap();
        assert_eq!(alert.record().title(), "No files selected");
        assert_eq!(app.submitted_files(), 0);
    }

    #[test]
    fn remove_out_of_range_propagates() {
        let mut app = quiet_app();
        let err = app.update(Message::RemoveFile(5)).unwrap_err();
        assert!(matches!(
            err,
            Error::Intake(IntakeError::IndexOutOfRange { index: 5, len: 0 })
        ));
    }

    #[test]
    fn intake_alerts_use_configured_lifetime() {
        let mut config = Config::default();
        config.alerts.default_lifetime_ms = 1000;
        let mut app = App::new(&config).with_feed(None);

        app.update(Message::Submit).unwrap();
        app.update(Message::Tick(Duration::from_millis(999))).unwrap();
        assert_eq!(app.alerts().len(), 1);
        app.update(Message::Tick(Duration::from_millis(1))).unwrap();
        assert!(app.alerts().is_empty());
    }

    #[test]
    fn feed_detections_become_alerts() {
        let feed = DetectionFeed::seeded(3).with_chance(1.0);
        let mut app = quiet_app().with_feed(Some(feed));

        app.update(Message::Tick(Duration::from_secs(5))).unwrap();

        assert_eq!(app.detections(), 1);
        assert_eq!(app.alerts().len(), 1);
        let alert = app.alerts().active().next().unwrap();
        assert_eq!(alert.remaining(), crate::simulation::DETECTION_LIFETIME);
    }

    #[test]
    fn forwarded_dismiss_and_shutdown() {
        let mut app = quiet_app();
        app.update(Message::Submit).unwrap();
        app.update(Message::Submit).unwrap();
        let first = app.alerts().active().next().unwrap().id().clone();

        app.update(Message::Alert(alerts::Message::Dismiss(first))).unwrap();
        assert_eq!(app.alerts().len(), 1);

        app.shutdown();
        assert!(app.alerts().is_empty());
        assert_eq!(app.alerts().history().len(), 2);
    }

    #[test]
    fn zero_detection_period_is_clamped() {
        let mut config = Config::default();
        config.simulation.period_secs = 0;
        config.simulation.chance = 1.0;
        let mut app = App::new(&config);

        // 30 simulated seconds at the one-second floor.
        for _ in 0..300 {
            app.update(Message::Tick(Duration::from_millis(100))).unwrap();
        }

        assert_eq!(app.detections(), 30);
    }
}
