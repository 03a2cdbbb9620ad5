// SPDX-License-Identifier: MPL-2.0
//! Alert records and identifiers.

use super::kind::AlertKind;
use std::fmt;
use std::time::{Duration, SystemTime};

/// Lifetime given to alerts that do not specify one.
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(5000);

/// Unique identifier of an alert.
///
/// Producers may supply their own string ids; [`AlertId::generate`] hands out
/// process-unique ones for producers that don't.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(String);

impl AlertId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new process-unique identifier (`alert-<n>`).
    #[must_use]
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(format!("alert-{}", COUNTER.fetch_add(1, Ordering::Relaxed)))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlertId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AlertId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A transient notification shown to the user.
///
/// Every field is fixed at construction; the builder methods consume and
/// return the record so producers can finish configuring it before handing
/// it to the alert manager.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord {
    id: AlertId,
    kind: AlertKind,
    title: String,
    message: String,
    created_at: SystemTime,
    auto_expire: bool,
    lifetime: Duration,
}

impl AlertRecord {
    /// Creates an auto-expiring record with the default lifetime.
    pub fn new(
        id: impl Into<AlertId>,
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            created_at: SystemTime::now(),
            auto_expire: true,
            lifetime: DEFAULT_LIFETIME,
        }
    }

    /// Creates a record with a generated id.
    pub fn with_generated_id(
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(AlertId::generate(), kind, title, message)
    }

    /// Sets how long the record stays active before expiring.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Makes the record stay until it is dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.auto_expire = false;
        self
    }

    /// Overrides the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = created_at;
        self
    }

    #[must_use]
    pub fn id(&self) -> &AlertId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Returns whether the record expires on its own.
    #[must_use]
    pub fn auto_expire(&self) -> bool {
        self.auto_expire
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}
