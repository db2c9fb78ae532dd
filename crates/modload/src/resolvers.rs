//! Bundled resolver implementations.
//!
//! The loading mechanism is always injected via `ModuleResolver`; these two
//! cover the common cases so callers do not have to write an adapter for a
//! data-file module or a plain function.

use std::path::Path;

use modload_core::{LoadError, ModuleResolver};

/// Resolves each file as a JSON document (`serde_json::Value` unit).
///
/// A file that cannot be read fails with `LoadError::Io`; one that reads
/// but does not parse fails with `LoadError::Malformed`.
#[derive(Debug, Default, Clone)]
pub struct JsonResolver;

impl ModuleResolver for JsonResolver {
    type Unit = serde_json::Value;

    fn resolve(&self, path: &Path) -> Result<serde_json::Value, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Adapts a plain function into a resolver.
pub struct FnResolver<F>(F);

impl<F, U> FnResolver<F>
where
    F: Fn(&Path) -> Result<U, LoadError>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F, U> ModuleResolver for FnResolver<F>
where
    F: Fn(&Path) -> Result<U, LoadError>,
{
    type Unit = U;

    fn resolve(&self, path: &Path) -> Result<U, LoadError> {
        (self.0)(path)
    }
}
