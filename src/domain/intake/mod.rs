// SPDX-License-Identifier: MPL-2.0
//! File intake domain types.
//!
//! This module contains the descriptors and rules used by
//! [`crate::intake`], independent of any file system access.

pub mod file;
pub mod policy;
pub mod rejection;

pub use file::{CandidateFile, FileCategory};
pub use policy::{
    IntakePolicy, DEFAULT_ACCEPTED_MIME_TYPES, DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_FILE_SIZE_BYTES,
};
pub use rejection::{Rejection, RejectionReason};
