//! Scanner subsystem: root resolution, existence check, and the two
//! directory walkers. File discovery without the loading step.

pub(crate) mod async_walker;
pub(crate) mod resolve;
pub(crate) mod walker;

use std::path::{Path, PathBuf};

use modload_core::{NameFilter, ScanError, ScanOptions};

/// Discover all files under `dir` that pass the name filters.
///
/// Resolves `dir` against the working directory, checks it exists, then
/// walks it (recursively when `options.recursive`). Fails only with
/// [`ScanError`]; no matches yields an empty vec.
pub async fn get_all_files(
    dir: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<Vec<PathBuf>, ScanError> {
    let root = resolve::absolutize(dir.as_ref());
    resolve::check_root_async(&root).await?;

    let filter = NameFilter::compile(options);
    let files = async_walker::walk(&root, &filter, options.recursive).await?;
    tracing::debug!(root = %root.display(), count = files.len(), "scan complete");
    Ok(files)
}

/// Discover every file in the whole tree under `dir`, unfiltered.
pub async fn get_all_files_recursive(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ScanError> {
    get_all_files(dir, &ScanOptions::recursive()).await
}
