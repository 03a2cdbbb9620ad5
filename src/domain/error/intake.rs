// SPDX-License-Identifier: MPL-2.0
//! Intake error types.

use std::fmt;

/// Errors raised by intake batch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// A removal index fell outside `[0, len)`.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the batch at the time of the call.
        len: usize,
    },

    /// A submission was attempted with nothing selected.
    EmptyBatch,
}

impl IntakeError {
    /// Returns the title used when the error is surfaced as an alert.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            IntakeError::IndexOutOfRange { .. } => "Invalid selection",
            IntakeError::EmptyBatch => "No files selected",
        }
    }
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for a batch of {}", index, len)
            }
            IntakeError::EmptyBatch => write!(f, "Please select files to upload."),
        }
    }
}

impl std::error::Error for IntakeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_index_and_len() {
        let err = IntakeError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index 5 is out of range for a batch of 2");
    }

    #[test]
    fn empty_batch_has_user_facing_text() {
        assert_eq!(IntakeError::EmptyBatch.title(), "No files selected");
        assert_eq!(
            IntakeError::EmptyBatch.to_string(),
            "Please select files to upload."
        );
    }
}
