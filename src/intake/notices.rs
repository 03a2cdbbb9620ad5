// SPDX-License-Identifier: MPL-2.0
//! User-facing alerts for intake outcomes.

use super::size::format_file_size;
use crate::domain::alert::{AlertKind, AlertRecord};
use crate::domain::error::IntakeError;
use crate::domain::intake::{IntakePolicy, Rejection, RejectionReason};

/// Builds the error alert shown for a refused file.
#[must_use]
pub fn rejection_alert(rejection: &Rejection, policy: &IntakePolicy) -> AlertRecord {
    let (title, message) = match rejection.reason {
        RejectionReason::UnsupportedType => (
            "Invalid file type",
            format!("{} is not a supported file type.", rejection.name()),
        ),
        RejectionReason::TooLarge => (
            "File too large",
            format!(
                "{} exceeds the {} limit.",
                rejection.name(),
                compact_size(policy.max_file_size_bytes)
            ),
        ),
    };
    AlertRecord::with_generated_id(AlertKind::Error, title, message)
}

/// Size without the unit separator, as in "100MB".
fn compact_size(bytes: u64) -> String {
    format_file_size(bytes).replace(' ', "")
}

/// Builds the success alert shown after a batch was submitted.
#[must_use]
pub fn submitted_alert(count: usize) -> AlertRecord {
    AlertRecord::with_generated_id(
        AlertKind::Success,
        "Upload successful",
        format!("{count} file(s) uploaded for crime detection analysis."),
    )
}

/// Builds the error alert for a failed intake operation.
#[must_use]
pub fn error_alert(error: &IntakeError) -> AlertRecord {
    AlertRecord::with_generated_id(AlertKind::Error, error.title(), error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::CandidateFile;

    #[test]
    fn unsupported_type_alert_names_file() {
        let rejection = Rejection::new(
            CandidateFile::new("b.gif", 10, "image/gif"),
            RejectionReason::UnsupportedType,
        );
        let alert = rejection_alert(&rejection, &IntakePolicy::default());

        assert_eq!(alert.kind(), AlertKind::Error);
        assert_eq!(alert.title(), "Invalid file type");
        assert_eq!(alert.message(), "b.gif is not a supported file type.");
    }

    #[test]
    fn too_large_alert_mentions_limit() {
        let rejection = Rejection::new(
            CandidateFile::new("huge.mp4", u64::MAX, "video/mp4"),
            RejectionReason::TooLarge,
        );
        let alert = rejection_alert(&rejection, &IntakePolicy::default());

        assert_eq!(alert.title(), "File too large");
        assert_eq!(alert.message(), "huge.mp4 exceeds the 100MB limit.");
    }

    #[test]
    fn submission_alerts() {
        let ok = submitted_alert(3);
        assert_eq!(ok.kind(), AlertKind::Success);
        assert_eq!(
            ok.message(),
            "3 file(s) uploaded for crime detection analysis."
        );

        let empty = error_alert(&IntakeError::EmptyBatch);
        assert_eq!(empty.title(), "No files selected");
        assert_eq!(empty.message(), "Please select files to upload.");
    }

    #[test]
    fn too_large_alert_follows_configured_limit() {
        let policy = IntakePolicy {
            max_file_size_bytes: 1536,
            ..IntakePolicy::default()
        };
        let rejection = Rejection::new(
            CandidateFile::new("clip.avi", 4096, "video/avi"),
            RejectionReason::TooLarge,
        );

        let alert = rejection_alert(&rejection, &policy);
        assert_eq!(alert.message(), "clip.avi exceeds the 1.5KB limit.");
    }
}
