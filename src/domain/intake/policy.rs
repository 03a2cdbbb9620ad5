// SPDX-License-Identifier: MPL-2.0
//! Intake acceptance rules.

/// MIME types accepted by the upload widget out of the box.
pub const DEFAULT_ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "video/mp4", "video/avi"];

/// Default per-file size limit (100 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// Default number of files a pending batch may hold.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 5;

/// Acceptance rules applied to candidate files.
///
/// Supplied by the caller on every validation; a zero `max_batch_size` is
/// valid and simply yields empty batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakePolicy {
    /// Allowed MIME types, compared exactly.
    pub accepted_mime_types: Vec<String>,
    /// Largest accepted file, inclusive.
    pub max_file_size_bytes: u64,
    /// Maximum number of files retained in a pending batch.
    pub max_batch_size: usize,
}

impl IntakePolicy {
    /// Creates a policy from its three rules.
    pub fn new<I, S>(accepted_mime_types: I, max_file_size_bytes: u64, max_batch_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted_mime_types: accepted_mime_types.into_iter().map(Into::into).collect(),
            max_file_size_bytes,
            max_batch_size,
        }
    }

    /// Returns whether `mime_type` is in the accepted set.
    #[must_use]
    pub fn accepts_mime(&self, mime_type: &str) -> bool {
        self.accepted_mime_types.iter().any(|m| m == mime_type)
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACCEPTED_MIME_TYPES.iter().copied(),
            DEFAULT_MAX_FILE_SIZE_BYTES,
            DEFAULT_MAX_BATCH_SIZE,
        )
    }
}
