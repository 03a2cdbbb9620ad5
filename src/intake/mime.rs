// SPDX-License-Identifier: MPL-2.0
//! MIME type detection from file extensions.
//!
//! Hosts use this to build [`CandidateFile`]s from paths. The browser
//! reports a MIME type for every picked file; on the command line the
//! extension is all we have.

use crate::domain::intake::CandidateFile;
use std::fs;
use std::io;
use std::path::Path;

/// MIME type used when the extension is unknown.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Known extensions and their MIME types.
pub mod extensions {
    /// Image extensions.
    pub const IMAGE: &[(&str, &str)] = &[
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
    ];

    /// Video extensions.
    pub const VIDEO: &[(&str, &str)] = &[
        ("mp4", "video/mp4"),
        ("m4v", "video/mp4"),
        ("avi", "video/avi"),
        ("mov", "video/quicktime"),
        ("webm", "video/webm"),
        ("mkv", "video/x-matroska"),
    ];
}

/// Returns the MIME type for a file extension (case-insensitive).
#[must_use]
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_lowercase();
    extensions::IMAGE
        .iter()
        .chain(extensions::VIDEO.iter())
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Returns the MIME type for a path, falling back to
/// [`FALLBACK_MIME_TYPE`].
#[must_use]
pub fn detect_mime_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// Builds a candidate descriptor for a file on disk.
///
/// # Errors
///
/// Returns an I/O error if the file metadata cannot be read.
pub fn candidate_from_path(path: &Path) -> io::Result<CandidateFile> {
    let metadata = fs::metadata(path)?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(CandidateFile::new(name, metadata.len(), detect_mime_type(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn maps_common_extensions() {
        assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("avi"), Some("video/avi"));
        assert_eq!(mime_for_extension("docx"), None);
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(detect_mime_type(&PathBuf::from("notes.txt")), FALLBACK_MIME_TYPE);
        assert_eq!(detect_mime_type(&PathBuf::from("Makefile")), FALLBACK_MIME_TYPE);
        assert_eq!(detect_mime_type(&PathBuf::from("clip.MP4")), "video/mp4");
    }

    #[test]
    fn candidate_from_path_reads_size() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("frame.png");
        fs::write(&path, [0u8; 42]).expect("failed to write file");

        let candidate = candidate_from_path(&path).expect("metadata should be readable");
        assert_eq!(candidate, CandidateFile::new("frame.png", 42, "image/png"));
    }

    #[test]
    fn candidate_from_missing_path_errors() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(candidate_from_path(&dir.path().join("gone.png")).is_err());
    }
}
