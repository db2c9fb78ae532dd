//! Diagnostic sink for per-file load failures.
//!
//! Not an error channel: the sink is purely observational. The loader drops
//! failed files from the result set and the sink is the only place the
//! failure is visible.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::LoadError;

/// Receives one notification per dropped file.
pub trait DiagnosticSink: Send + Sync {
    fn module_load_failed(&self, path: &Path, error: &LoadError);
}

/// Default sink: structured `tracing` warning per failure.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn module_load_failed(&self, path: &Path, error: &LoadError) {
        tracing::warn!(path = %path.display(), error = %error, "module load failed, dropping file");
    }
}

/// A recorded load failure.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Sink that accumulates failures for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    failures: Mutex<Vec<LoadFailure>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the failures recorded so far.
    pub fn failures(&self) -> Vec<LoadFailure> {
        self.failures.lock().map(|f| f.clone()).unwrap_or_default()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.lock().map(|f| f.len()).unwrap_or(0)
    }
}

impl DiagnosticSink for CollectingSink {
    fn module_load_failed(&self, path: &Path, error: &LoadError) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(LoadFailure {
                path: path.to_path_buf(),
                message: error.to_string(),
            });
        }
    }
}
