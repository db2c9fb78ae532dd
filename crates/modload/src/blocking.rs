//! Blocking namespace: the same four operations with every filesystem read
//! performed on the calling thread. Fully deterministic single-threaded
//! depth-first traversal, no suspension points, output identical to the
//! suspending pipeline for the same tree.

use std::path::{Path, PathBuf};

use modload_core::{DiagnosticSink, ModuleResolver, NameFilter, ScanError, ScanOptions, TracingSink};

use crate::loader::collect_units;
use crate::scanner::{resolve, walker};

/// Blocking form of [`crate::get_all_files`].
pub fn get_all_files(
    dir: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<Vec<PathBuf>, ScanError> {
    let root = resolve::absolutize(dir.as_ref());
    resolve::check_root(&root)?;

    let filter = NameFilter::compile(options);
    let files = walker::walk(&root, &filter, options.recursive)?;
    tracing::debug!(root = %root.display(), count = files.len(), "scan complete");
    Ok(files)
}

/// Blocking form of [`crate::get_all_files_recursive`].
pub fn get_all_files_recursive(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ScanError> {
    get_all_files(dir, &ScanOptions::recursive())
}

/// Blocking form of [`crate::load_modules`].
pub fn load_modules<R: ModuleResolver>(
    dir: impl AsRef<Path>,
    options: &ScanOptions,
    resolver: &R,
) -> Result<Vec<R::Unit>, ScanError> {
    load_modules_with_sink(dir, options, resolver, &TracingSink)
}

/// Blocking form of [`crate::load_modules_with_sink`].
pub fn load_modules_with_sink<R: ModuleResolver>(
    dir: impl AsRef<Path>,
    options: &ScanOptions,
    resolver: &R,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<R::Unit>, ScanError> {
    let root = resolve::absolutize(dir.as_ref());
    resolve::check_root(&root)?;

    let filter = NameFilter::compile(options);
    let paths = walker::walk(&root, &filter, options.recursive)?;
    Ok(collect_units(paths, resolver, sink))
}
