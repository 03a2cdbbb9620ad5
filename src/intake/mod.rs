// SPDX-License-Identifier: MPL-2.0
//! File intake for the upload flow.
//!
//! Candidate files are filtered against an [`IntakePolicy`] by type, size
//! and batch count. Validation is pure; only [`mime::candidate_from_path`]
//! reads file metadata, for hosts that start from paths.
//!
//! # Example
//!
//! ```
//! use crimewatch::domain::intake::{CandidateFile, IntakePolicy, RejectionReason};
//! use crimewatch::intake::validate_and_merge;
//!
//! let policy = IntakePolicy::new(["image/png"], 1000, 2);
//! let incoming = [
//!     CandidateFile::new("a.png", 500, "image/png"),
//!     CandidateFile::new("b.gif", 200, "image/gif"),
//! ];
//!
//! let outcome = validate_and_merge(&[], &incoming, &policy);
//! assert_eq!(outcome.batch.len(), 1);
//! assert_eq!(outcome.rejections[0].reason, RejectionReason::UnsupportedType);
//! ```
//!
//! [`IntakePolicy`]: crate::domain::intake::IntakePolicy

pub mod mime;
pub mod notices;
mod session;
mod size;
mod validator;

pub use session::IntakeSession;
pub use size::format_file_size;
pub use validator::{check, remove_at, validate_and_merge, IntakeOutcome};
