// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle management.
//!
//! The `AlertManager` owns the set of active alerts, advances their
//! remaining lifetimes on every tick and reports each removal exactly once
//! through the registered callback. It never owns a timer; the host calls
//! [`AlertManager::tick`] with the time elapsed since the previous call.

use super::history::{AlertHistory, RemovalCause, RemovedAlert};
use crate::domain::alert::{AlertId, AlertRecord, HistoryCapacity};
use crate::logging;
use std::fmt;
use std::time::Duration;

/// Callback invoked with the id of every alert leaving the active set.
pub type RemovalCallback = Box<dyn FnMut(&AlertId)>;

/// Messages for alert state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Advance lifetimes by the given elapsed time.
    Tick(Duration),
    /// Dismiss a specific alert by id.
    Dismiss(AlertId),
    /// Dismiss every active alert.
    DismissAll,
}

/// An alert currently in the active set.
#[derive(Debug, Clone)]
pub struct ActiveAlert {
    record: AlertRecord,
    remaining: Duration,
    elapsed: Duration,
}

impl ActiveAlert {
    fn new(record: AlertRecord) -> Self {
        Self {
            remaining: record.lifetime(),
            elapsed: Duration::ZERO,
            record,
        }
    }

    #[must_use]
    pub fn record(&self) -> &AlertRecord {
        &self.record
    }

    #[must_use]
    pub fn id(&self) -> &AlertId {
        self.record.id()
    }

    /// Lifetime left before expiry. Stays at the full lifetime for
    /// alerts that don't auto-expire.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Total ticked time since the alert was added.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Fraction of lifetime left, from `1.0` (just added) down to `0.0`.
    ///
    /// Returns `None` for alerts that don't auto-expire, since they show no
    /// countdown.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        if !self.record.auto_expire() {
            return None;
        }
        let lifetime = self.record.lifetime();
        if lifetime.is_zero() {
            return Some(0.0);
        }
        Some(self.remaining.as_secs_f32() / lifetime.as_secs_f32())
    }

    fn advance(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.record.auto_expire() {
            self.remaining = self.remaining.saturating_sub(elapsed);
        }
    }

    fn is_expired(&self) -> bool {
        self.record.auto_expire() && self.remaining.is_zero()
    }
}

/// Manages the active alerts and their removal notifications.
pub struct AlertManager {
    /// Active alerts in insertion order (oldest first).
    active: Vec<ActiveAlert>,
    /// Recently removed alerts.
    history: AlertHistory,
    on_removed: Option<RemovalCallback>,
}

impl AlertManager {
    /// Creates an empty manager with the default history capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_capacity(HistoryCapacity::default())
    }

    /// Creates an empty manager keeping up to `capacity` removed alerts.
    #[must_use]
    pub fn with_history_capacity(capacity: HistoryCapacity) -> Self {
        Self {
            active: Vec::new(),
            history: AlertHistory::new(capacity),
            on_removed: None,
        }
    }

    /// Registers the callback fired once for every removed alert,
    /// replacing any previous one.
    pub fn on_removed<F>(&mut self, callback: F)
    where
        F: FnMut(&AlertId) + 'static,
    {
        self.on_removed = Some(Box::new(callback));
    }

    /// Adds a new active alert.
    ///
    /// Returns `false` without touching the existing alert if one with the
    /// same id is already active.
    pub fn add(&mut self, record: AlertRecord) -> bool {
        if self.contains(record.id()) {
            tracing::debug!(id = %record.id(), "ignoring alert with duplicate id");
            return false;
        }

        tracing::debug!(
            id = %record.id(),
            kind = %record.kind(),
            lifetime_ms = logging::millis(record.lifetime()),
            auto_expire = record.auto_expire(),
            "alert added"
        );
        self.active.push(ActiveAlert::new(record));
        true
    }

    /// Dismisses an alert by its id.
    ///
    /// Returns `true` if the alert was active and has been removed.
    pub fn dismiss(&mut self, id: &AlertId) -> bool {
        let Some(pos) = self.active.iter().position(|a| a.id() == id) else {
            return false;
        };
        let alert = self.active.remove(pos);
        self.finish(alert, RemovalCause::Dismissed);
        true
    }

    /// Dismisses every active alert, oldest first.
    pub fn dismiss_all(&mut self) {
        let drained = std::mem::take(&mut self.active);
        for alert in drained {
            self.finish(alert, RemovalCause::Dismissed);
        }
    }

    /// Advances every auto-expiring alert by `elapsed` and removes those
    /// whose lifetime is used up.
    ///
    /// Returns the ids of the expired alerts in insertion order.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<AlertId> {
        for alert in &mut self.active {
            alert.advance(elapsed);
        }

        if !self.active.iter().any(ActiveAlert::is_expired) {
            return Vec::new();
        }

        let (expired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(ActiveAlert::is_expired);
        self.active = kept;

        let mut ids = Vec::with_capacity(expired.len());
        for alert in expired {
            ids.push(alert.id().clone());
            self.finish(alert, RemovalCause::Expired);
        }
        ids
    }

    /// Handles an alert message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(elapsed) => {
                self.tick(*elapsed);
            }
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::DismissAll => self.dismiss_all(),
        }
    }

    /// Returns the active alerts in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &ActiveAlert> {
        self.active.iter()
    }

    /// Returns the active alert with the given id.
    #[must_use]
    pub fn get(&self, id: &AlertId) -> Option<&ActiveAlert> {
        self.active.iter().find(|a| a.id() == id)
    }

    /// Returns the countdown fraction of an active alert.
    #[must_use]
    pub fn progress(&self, id: &AlertId) -> Option<f32> {
        self.get(id).and_then(ActiveAlert::progress)
    }

    #[must_use]
    pub fn contains(&self, id: &AlertId) -> bool {
        self.active.iter().any(|a| a.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the recently removed alerts.
    #[must_use]
    pub fn history(&self) -> &AlertHistory {
        &self.history
    }

    fn finish(&mut self, alert: ActiveAlert, cause: RemovalCause) {
        tracing::debug!(id = %alert.id(), ?cause, "alert removed");

        if let Some(callback) = self.on_removed.as_mut() {
            callback(alert.id());
        }

        self.history.push(RemovedAlert {
            active_for: alert.elapsed,
            record: alert.record,
            cause,
        });
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AlertManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertManager")
            .field("active", &self.active)
            .field("history", &self.history)
            .field("on_removed", &self.on_removed.is_some())
            .finish()
    }
}
