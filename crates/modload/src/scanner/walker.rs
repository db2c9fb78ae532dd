//! Blocking directory walker.
//!
//! Depth-first, filesystem listing order: every entry of a directory is
//! visited in readdir order, recursing immediately into each subdirectory
//! before moving on to the directory's next sibling entry. Directories are
//! never emitted; files are kept iff the compiled name filter matches.

use std::path::{Path, PathBuf};

use modload_core::{NameFilter, ScanError};

/// Walk `root`, returning the qualifying file paths in depth-first order.
///
/// `root` must already have passed the existence check. An empty result is
/// not an error; a directory that cannot be listed mid-walk aborts the
/// whole call.
pub(crate) fn walk(
    root: &Path,
    filter: &NameFilter,
    recursive: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    let mut out = Vec::new();
    walk_dir(root, filter, recursive, &mut out)?;
    Ok(out)
}

fn walk_dir(
    dir: &Path,
    filter: &NameFilter,
    recursive: bool,
    out: &mut Vec<PathBuf>,
) -> Result<(), ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ScanError::DirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ScanError::DirUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| ScanError::DirUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        if file_type.is_dir() {
            // Skipped entirely when not recursive: a directory contributes
            // nothing, not even as an excluded item.
            if recursive {
                walk_dir(&entry.path(), filter, recursive, out)?;
            }
        } else if filter.matches(&entry.file_name().to_string_lossy()) {
            out.push(entry.path());
        }
    }

    Ok(())
}
