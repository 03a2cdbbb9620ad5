// SPDX-License-Identifier: MPL-2.0
//! Pending upload batch owned by a single host.

use super::validator::{self, IntakeOutcome};
use crate::domain::error::IntakeError;
use crate::domain::intake::{CandidateFile, IntakePolicy, Rejection};

/// Holds the pending batch and the policy it is validated against.
#[derive(Debug, Clone, Default)]
pub struct IntakeSession {
    policy: IntakePolicy,
    batch: Vec<CandidateFile>,
}

impl IntakeSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new(policy: IntakePolicy) -> Self {
        Self {
            policy,
            batch: Vec::new(),
        }
    }

    /// Validates `incoming` and merges accepted files into the batch.
    ///
    /// Returns the files refused by the policy.
    pub fn offer(&mut self, incoming: &[CandidateFile]) -> Vec<Rejection> {
        let IntakeOutcome {
            batch,
            rejections,
            dropped,
        } = validator::validate_and_merge(&self.batch, incoming, &self.policy);

        tracing::debug!(
            offered = incoming.len(),
            rejected = rejections.len(),
            dropped,
            pending = batch.len(),
            "files offered"
        );
        self.batch = batch;
        rejections
    }

    /// Removes the file at `index` from the batch.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::IndexOutOfRange`] if `index` is past the end;
    /// the batch is left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<CandidateFile, IntakeError> {
        let removed = self
            .batch
            .get(index)
            .cloned()
            .ok_or(IntakeError::IndexOutOfRange {
                index,
                len: self.batch.len(),
            })?;
        self.batch = validator::remove_at(&self.batch, index)?;
        Ok(removed)
    }

    /// Takes the pending batch for analysis, leaving the session empty.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::EmptyBatch`] if nothing is selected.
    pub fn submit(&mut self) -> Result<Vec<CandidateFile>, IntakeError> {
        if self.batch.is_empty() {
            return Err(IntakeError::EmptyBatch);
        }
        let submitted = std::mem::take(&mut self.batch);
        tracing::info!(files = submitted.len(), "batch submitted for analysis");
        Ok(submitted)
    }

    /// Drops every pending file.
    pub fn clear(&mut self) {
        self.batch.clear();
    }

    #[must_use]
    pub fn batch(&self) -> &[CandidateFile] {
        &self.batch
    }

    #[must_use]
    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Returns `(pending, capacity)` for the "n/max" badge.
    #[must_use]
    pub fn fill(&self) -> (usize, usize) {
        (self.batch.len(), self.policy.max_batch_size)
    }

    /// Returns the total size of the pending batch.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.batch.iter().map(|f| f.size_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::RejectionReason;

    fn session() -> IntakeSession {
        IntakeSession::new(IntakePolicy::new(["image/png", "video/mp4"], 1000, 3))
    }

    #[test]
    fn offer_accumulates_across_calls() {
        let mut session = session();
        session.offer(&[CandidateFile::new("a.png", 10, "image/png")]);
        let rejections = session.offer(&[
            CandidateFile::new("b.mp4", 20, "video/mp4"),
            CandidateFile::new("c.txt", 1, "text/plain"),
        ]);

        assert_eq!(session.batch().len(), 2);
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].reason, RejectionReason::UnsupportedType);
        assert_eq!(session.fill(), (2, 3));
        assert_eq!(session.total_bytes(), 30);
    }

    #[test]
    fn remove_returns_file_and_keeps_order() {
        let mut session = session();
        session.offer(&[
            CandidateFile::new("a.png", 1, "image/png"),
            CandidateFile::new("b.png", 1, "image/png"),
            CandidateFile::new("c.png", 1, "image/png"),
        ]);

        let removed = session.remove(1).unwrap();
        assert_eq!(removed.name, "b.png");
        let names: Vec<_> = session.batch().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
    }

    #[test]
    fn remove_out_of_range_leaves_batch() {
        let mut session = session();
        session.offer(&[CandidateFile::new("a.png", 1, "image/png")]);

        assert_eq!(
            session.remove(4),
            Err(IntakeError::IndexOutOfRange { index: 4, len: 1 })
        );
        assert_eq!(session.batch().len(), 1);
    }

    #[test]
    fn submit_drains_batch() {
        let mut session = session();
        session.offer(&[CandidateFile::new("a.png", 1, "image/png")]);

        let submitted = session.submit().unwrap();
        assert_eq!(submitted.len(), 1);
        assert!(session.batch().is_empty());
        assert_eq!(session.submit(), Err(IntakeError::EmptyBatch));
    }
}
