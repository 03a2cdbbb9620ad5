// SPDX-License-Identifier: MPL-2.0
//! Candidate file descriptors.

/// Broad category of a file, derived from its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// `image/*`
    Image,
    /// `video/*`
    Video,
    /// Anything else.
    Other,
}

/// A file offered for intake.
///
/// This is a pure descriptor; nothing here touches the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name as shown to the user.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type reported for the file (e.g. `image/png`).
    pub mime_type: String,
}

impl CandidateFile {
    /// Creates a new candidate file descriptor.
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Returns the category implied by the MIME type prefix.
    #[must_use]
    pub fn category(&self) -> FileCategory {
        if self.mime_type.starts_with("image/") {
            FileCategory::Image
        } else if self.mime_type.starts_with("video/") {
            FileCategory::Video
        } else {
            FileCategory::Other
        }
    }
}
