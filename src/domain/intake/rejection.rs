// SPDX-License-Identifier: MPL-2.0
//! Rejection outcomes.
//!
//! These are classification results returned alongside the new batch,
//! not errors.

use super::file::CandidateFile;
use std::fmt;

/// Why a candidate file was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The MIME type is not in the policy's accepted set.
    UnsupportedType,
    /// The file is larger than the policy allows.
    TooLarge,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::UnsupportedType => write!(f, "UnsupportedType"),
            RejectionReason::TooLarge => write!(f, "TooLarge"),
        }
    }
}

/// A refused file together with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub file: CandidateFile,
    pub reason: RejectionReason,
}

impl Rejection {
    #[must_use]
    pub fn new(file: CandidateFile, reason: RejectionReason) -> Self {
        Self { file, reason }
    }

    /// Name of the refused file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.file.name
    }
}
