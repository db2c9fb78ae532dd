//! Fatal scan errors. Exactly one error class aborts a whole call:
//! the scan root (or a directory reached mid-walk) being inaccessible.

use std::path::PathBuf;

use super::error_code::{self, ModloadErrorCode};

/// Errors raised while resolving or walking a scan root.
///
/// Both variants carry the `INVALID PATH` marker in their Display output;
/// per-file load failures are never represented here (see `LoadError`).
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root does not exist, is not readable, or is not a directory.
    #[error("{}: {}", error_code::INVALID_PATH_MARKER, .path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A directory could not be listed after the root check passed
    /// (e.g. permissions changed mid-walk).
    #[error("{}: cannot read directory {}: {source}", error_code::INVALID_PATH_MARKER, .path.display())]
    DirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModloadErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPath { .. } => error_code::SCAN_INVALID_PATH,
            Self::DirUnreadable { .. } => error_code::SCAN_DIR_UNREADABLE,
        }
    }
}
