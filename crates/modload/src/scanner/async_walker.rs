//! Suspending directory walker.
//!
//! Same contract and ordering as the blocking walker: each subdirectory
//! scan is awaited to completion (including all its nested suspensions)
//! before the next sibling entry is read, so sibling directories are never
//! scanned in parallel and the output order matches the blocking mode.
//! The complete sequence is returned at once; nothing is streamed.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use modload_core::{NameFilter, ScanError};

/// Walk `root` with suspend-capable filesystem reads.
pub(crate) async fn walk(
    root: &Path,
    filter: &NameFilter,
    recursive: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    let mut out = Vec::new();
    walk_dir(root.to_path_buf(), filter, recursive, &mut out).await?;
    Ok(out)
}

// Recursive async fns need an explicitly boxed future.
fn walk_dir<'a>(
    dir: PathBuf,
    filter: &'a NameFilter,
    recursive: bool,
    out: &'a mut Vec<PathBuf>,
) -> Pin<Box<dyn Future<Output = Result<(), ScanError>> + Send + 'a>> {
    Box::pin(async move {
        let mut entries =
            tokio::fs::read_dir(&dir)
                .await
                .map_err(|source| ScanError::DirUnreadable {
                    path: dir.clone(),
                    source,
                })?;

        loop {
            let entry = entries
                .next_entry()
                .await
                .map_err(|source| ScanError::DirUnreadable {
                    path: dir.clone(),
                    source,
                })?;
            let Some(entry) = entry else { break };

            let file_type =
                entry
                    .file_type()
                    .await
                    .map_err(|source| ScanError::DirUnreadable {
                        path: dir.clone(),
                        source,
                    })?;

            if file_type.is_dir() {
                if recursive {
                    walk_dir(entry.path(), filter, recursive, out).await?;
                }
            } else if filter.matches(&entry.file_name().to_string_lossy()) {
                out.push(entry.path());
            }
        }

        Ok(())
    })
}
