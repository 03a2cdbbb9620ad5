// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::alerts;
use crate::domain::intake::CandidateFile;
use std::time::Duration;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Periodic tick carrying the time elapsed since the previous one.
    Tick(Duration),
    /// Files picked or dropped on the upload card.
    FilesOffered(Vec<CandidateFile>),
    /// Remove a pending file by its position in the batch.
    RemoveFile(usize),
    /// Start analysis of the pending batch.
    Submit,
    /// Forwarded alert message (dismiss button, ...).
    Alert(alerts::Message),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Log at debug level (`--verbose`).
    pub verbose: bool,
}
