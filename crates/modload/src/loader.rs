//! Module loader and the suspending facade.
//!
//! Loading is a synchronous per-item step layered after the walk in both
//! pipelines; a per-file failure never aborts the call. The walk itself is
//! the suspend-capable part here; the blocking namespace lives in
//! [`crate::blocking`].

use std::path::{Path, PathBuf};

use modload_core::{
    DiagnosticSink, LoadOutcome, ModuleResolver, NameFilter, ScanError, ScanOptions, TracingSink,
};

use crate::scanner::{async_walker, resolve};

/// Attempt to load one file. Never propagates an error: a failure is
/// returned as an explicit [`LoadOutcome::Failed`] for the aggregator to
/// report and drop.
pub fn try_load<R: ModuleResolver>(resolver: &R, path: &Path) -> LoadOutcome<R::Unit> {
    match resolver.resolve(path) {
        Ok(unit) => LoadOutcome::Loaded(unit),
        Err(error) => LoadOutcome::Failed {
            path: path.to_path_buf(),
            error,
        },
    }
}

/// Aggregate loaded units in walker order, forwarding each failure to the
/// diagnostic sink. N matching files with M failures yield N - M units.
pub(crate) fn collect_units<R: ModuleResolver>(
    paths: Vec<PathBuf>,
    resolver: &R,
    sink: &dyn DiagnosticSink,
) -> Vec<R::Unit> {
    let mut units = Vec::with_capacity(paths.len());
    for path in paths {
        match try_load(resolver, &path) {
            LoadOutcome::Loaded(unit) => units.push(unit),
            LoadOutcome::Failed { path, error } => sink.module_load_failed(&path, &error),
        }
    }
    units
}

/// Load all modules of a directory.
///
/// Fails with an error whose message contains `INVALID PATH` when the
/// directory is missing or inaccessible; per-file load failures are logged
/// through the default tracing sink and silently dropped from the result.
pub async fn load_modules<R: ModuleResolver>(
    dir: impl AsRef<Path>,
    options: &ScanOptions,
    resolver: &R,
) -> Result<Vec<R::Unit>, ScanError> {
    load_modules_with_sink(dir, options, resolver, &TracingSink).await
}

/// [`load_modules`] with an explicit diagnostic sink.
pub async fn load_modules_with_sink<R: ModuleResolver>(
    dir: impl AsRef<Path>,
    options: &ScanOptions,
    resolver: &R,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<R::Unit>, ScanError> {
    let root = resolve::absolutize(dir.as_ref());
    resolve::check_root_async(&root).await?;

    let filter = NameFilter::compile(options);
    let paths = async_walker::walk(&root, &filter, options.recursive).await?;
    Ok(collect_units(paths, resolver, sink))
}
