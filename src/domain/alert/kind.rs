// SPDX-License-Identifier: MPL-2.0
//! Alert classification.

use std::fmt;
use std::str::FromStr;

/// Kind of an alert, determining its styling and urgency.
///
/// Variants are ordered by increasing urgency so kinds can be compared
/// directly (`AlertKind::Critical > AlertKind::Warning`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AlertKind {
    /// Operation completed successfully.
    Success,
    /// Neutral information.
    #[default]
    Info,
    /// Something looks off but nothing is blocked.
    Warning,
    /// An operation failed.
    Error,
    /// A detection event that needs immediate attention.
    Critical,
}

impl AlertKind {
    /// All kinds, in urgency order.
    pub const ALL: [AlertKind; 5] = [
        AlertKind::Success,
        AlertKind::Info,
        AlertKind::Warning,
        AlertKind::Error,
        AlertKind::Critical,
    ];

    /// Returns the stable lowercase identifier for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
            AlertKind::Critical => "critical",
        }
    }

    /// Returns a short human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Info => "Info",
            AlertKind::Warning => "Warning",
            AlertKind::Error => "Error",
            AlertKind::Critical => "Critical",
        }
    }

    /// Returns whether this kind should draw the user's attention
    /// (errors and detections).
    #[must_use]
    pub fn is_urgent(self) -> bool {
        matches!(self, AlertKind::Error | AlertKind::Critical)
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown alert kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlertKind(pub String);

impl fmt::Display for UnknownAlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown alert kind `{}`, expected one of:", self.0)?;
        for kind in AlertKind::ALL {
            write!(f, " {kind}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownAlertKind {}

impl FromStr for AlertKind {
    type Err = UnknownAlertKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(AlertKind::Success),
            "info" => Ok(AlertKind::Info),
            "warning" => Ok(AlertKind::Warning),
            "error" => Ok(AlertKind::Error),
            // The dashboard calls detection alerts "crime".
            "critical" | "crime" => Ok(AlertKind::Critical),
            other => Err(UnknownAlertKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_ordering_puts_critical_last() {
        assert!(AlertKind::Critical > AlertKind::Error);
        assert!(AlertKind::Error > AlertKind::Warning);
        assert!(AlertKind::Warning > AlertKind::Info);
        assert!(AlertKind::Info > AlertKind::Success);
    }

    #[test]
    fn only_error_and_critical_are_urgent() {
        let urgent: Vec<_> = AlertKind::ALL.into_iter().filter(|k| k.is_urgent()).collect();
        assert_eq!(urgent, vec![AlertKind::Error, AlertKind::Critical]);
    }

    #[test]
    fn parses_every_identifier() {
        for kind in AlertKind::ALL {
            assert_eq!(kind.as_str().parse::<AlertKind>(), Ok(kind));
        }
        assert_eq!("CRIME".parse::<AlertKind>(), Ok(AlertKind::Critical));
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "panic".parse::<AlertKind>().unwrap_err();
        assert_eq!(err, UnknownAlertKind("panic".to_string()));
    }

    #[test]
    fn unknown_kind_lists_valid_names() {
        let err = "loud".parse::<AlertKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown alert kind `loud`, expected one of: success info warning error critical"
        );
    }
}
