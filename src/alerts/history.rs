// SPDX-License-Identifier: MPL-2.0
//! Bounded history of removed alerts.
//!
//! Removed alerts are kept in a ring buffer that evicts the oldest entry
//! once capacity is reached, feeding the dashboard's recent-alerts list.

use crate::domain::alert::{AlertId, AlertRecord, HistoryCapacity};
use std::collections::VecDeque;
use std::time::Duration;

/// How an alert left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// Its lifetime elapsed.
    Expired,
    /// It was dismissed explicitly.
    Dismissed,
}

/// An alert that is no longer active.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedAlert {
    /// The record as it was added.
    pub record: AlertRecord,
    /// Why it was removed.
    pub cause: RemovalCause,
    /// Total ticked time it spent active.
    pub active_for: Duration,
}

impl RemovedAlert {
    #[must_use]
    pub fn id(&self) -> &AlertId {
        self.record.id()
    }
}

/// Ring buffer of removed alerts, oldest first.
///
/// # Example
///
/// ```
/// use crimewatch::alerts::{AlertHistory, RemovalCause, RemovedAlert};
/// use crimewatch::domain::alert::{AlertKind, AlertRecord, HistoryCapacity};
/// use std::time::Duration;
///
/// let mut history = AlertHistory::new(HistoryCapacity::new(2));
/// for id in ["1", "2", "3"] {
///     history.push(RemovedAlert {
///         record: AlertRecord::new(id, AlertKind::Info, "t", "m"),
///         cause: RemovalCause::Expired,
///         active_for: Duration::ZERO,
///     });
/// }
///
/// let ids: Vec<_> = history.iter().map(|r| r.id().as_str()).collect();
/// assert_eq!(ids, vec!["2", "3"]);
/// ```
#[derive(Debug, Clone)]
pub struct AlertHistory {
    data: VecDeque<RemovedAlert>,
    capacity: usize,
}

impl AlertHistory {
    /// Creates an empty history with the given capacity.
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest if at capacity.
    pub fn push(&mut self, entry: RemovedAlert) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(entry);
    }

    /// Iterates entries in removal order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &RemovedAlert> {
        self.data.iter()
    }

    /// Iterates entries newest first.
    pub fn recent(&self) -> impl Iterator<Item = &RemovedAlert> {
        self.data.iter().rev()
    }

    /// Counts entries removed for the given cause.
    #[must_use]
    pub fn count(&self, cause: RemovalCause) -> usize {
        self.data.iter().filter(|r| r.cause == cause).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for AlertHistory {
    fn default() -> Self {
        Self::new(HistoryCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::AlertKind;

    fn removed(id: &str, cause: RemovalCause) -> RemovedAlert {
        RemovedAlert {
            record: AlertRecord::new(id, AlertKind::Warning, "t", "m"),
            cause,
            active_for: Duration::from_millis(10),
        }
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = AlertHistory::new(HistoryCapacity::new(3));
        for i in 0..5 {
            history.push(removed(&i.to_string(), RemovalCause::Expired));
        }

        assert_eq!(history.len(), 3);
        let ids: Vec<_> = history.iter().map(|r| r.id().as_str().to_string()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut history = AlertHistory::default();
        history.push(removed("a", RemovalCause::Dismissed));
        history.push(removed("b", RemovalCause::Expired));

        let first = history.recent().next().map(|r| r.id().as_str());
        assert_eq!(first, Some("b"));
    }

    #[test]
    fn counts_by_cause() {
        let mut history = AlertHistory::default();
        history.push(removed("a", RemovalCause::Dismissed));
        history.push(removed("b", RemovalCause::Expired));
        history.push(removed("c", RemovalCause::Expired));

        assert_eq!(history.count(RemovalCause::Expired), 2);
        assert_eq!(history.count(RemovalCause::Dismissed), 1);

        history.clear();
        assert!(history.is_empty());
    }
}
