// SPDX-License-Identifier: MPL-2.0
//! Batch validation against an intake policy.
//!
//! Both functions are pure: they take the current batch by reference and
//! return a new one without touching the file system.

use crate::domain::error::IntakeError;
use crate::domain::intake::{CandidateFile, IntakePolicy, Rejection, RejectionReason};

/// Result of merging incoming files into a pending batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeOutcome {
    /// The new pending batch, never longer than the policy's cap.
    pub batch: Vec<CandidateFile>,
    /// Incoming files refused by the policy, in arrival order.
    pub rejections: Vec<Rejection>,
    /// Accepted files that did not fit under the batch cap.
    ///
    /// These are dropped silently and do not appear in `rejections`.
    pub dropped: usize,
}

/// Classifies a single file against the policy.
///
/// The type check runs before the size check, so an oversized file of an
/// unsupported type is reported as [`RejectionReason::UnsupportedType`].
#[must_use]
pub fn check(file: &CandidateFile, policy: &IntakePolicy) -> Option<RejectionReason> {
    if !policy.accepts_mime(&file.mime_type) {
        Some(RejectionReason::UnsupportedType)
    } else if file.size_bytes > policy.max_file_size_bytes {
        Some(RejectionReason::TooLarge)
    } else {
        None
    }
}

/// Validates `incoming` and appends the accepted files to `existing`.
///
/// The merged batch keeps the first `policy.max_batch_size` entries;
/// later arrivals beyond the cap are counted in [`IntakeOutcome::dropped`].
#[must_use]
pub fn validate_and_merge(
    existing: &[CandidateFile],
    incoming: &[CandidateFile],
    policy: &IntakePolicy,
) -> IntakeOutcome {
    let mut rejections = Vec::new();
    let mut accepted = Vec::with_capacity(incoming.len());

    for file in incoming {
        match check(file, policy) {
            Some(reason) => rejections.push(Rejection::new(file.clone(), reason)),
            None => accepted.push(file),
        }
    }

    let cap = policy.max_batch_size;
    let total = existing.len() + accepted.len();
    let batch: Vec<CandidateFile> = existing
        .iter()
        .chain(accepted)
        .take(cap)
        .cloned()
        .collect();
    let dropped = total - batch.len();

    if dropped > 0 {
        tracing::debug!(dropped, cap, "batch cap reached, dropping accepted files");
    }

    IntakeOutcome {
        batch,
        rejections,
        dropped,
    }
}

/// Returns a copy of `batch` without the entry at `index`.
///
/// # Errors
///
/// Returns [`IntakeError::IndexOutOfRange`] if `index >= batch.len()`.
pub fn remove_at(batch: &[CandidateFile], index: usize) -> Result<Vec<CandidateFile>, IntakeError> {
    if index >= batch.len() {
        return Err(IntakeError::IndexOutOfRange {
            index,
            len: batch.len(),
        });
    }

    Ok(batch
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, file)| file.clone())
        .collect())
}
