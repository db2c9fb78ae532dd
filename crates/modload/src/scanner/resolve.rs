//! Scan-root resolution and existence check.
//!
//! Resolution is lexical only; the probe that follows is the single place
//! where the root is allowed to fail, and it fails with the fatal
//! `INVALID PATH` error the facades surface to callers.

use std::path::{Path, PathBuf};

use modload_core::ScanError;

/// Turn a possibly-relative directory argument into an absolute path.
///
/// Pure path-string manipulation against the current working directory.
/// Errors (empty path, unavailable cwd) fall back to the input unchanged;
/// anything unusable is caught by the existence check.
pub(crate) fn absolutize(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn classify(root: &Path, probe: std::io::Result<std::fs::Metadata>) -> Result<(), ScanError> {
    match probe {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        // Exists but is not a directory: readdir would fail one step later
        // with the same caller-visible INVALID PATH failure.
        Ok(_) => Err(ScanError::InvalidPath {
            path: root.to_path_buf(),
            source: None,
        }),
        Err(source) => Err(ScanError::InvalidPath {
            path: root.to_path_buf(),
            source: Some(source),
        }),
    }
}

/// Verify the resolved root exists and is a readable directory.
pub(crate) fn check_root(root: &Path) -> Result<(), ScanError> {
    classify(root, std::fs::metadata(root))
}

/// Suspending variant of [`check_root`].
pub(crate) async fn check_root_async(root: &Path) -> Result<(), ScanError> {
    classify(root, tokio::fs::metadata(root).await)
}
