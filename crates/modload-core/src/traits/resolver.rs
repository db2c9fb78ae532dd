//! The module-resolution collaborator.
//!
//! The core never hard-wires a loading mechanism: given a resolved file
//! path, a `ModuleResolver` either produces the in-memory unit or fails
//! with a `LoadError`. Loading is synchronous per item in both pipelines.

use std::path::{Path, PathBuf};

use crate::errors::LoadError;

/// Resolves a file path into an in-memory unit.
pub trait ModuleResolver {
    /// The opaque unit type produced for each successfully loaded file.
    type Unit;

    /// Materialize the unit at `path`, or fail.
    fn resolve(&self, path: &Path) -> Result<Self::Unit, LoadError>;
}

/// Outcome of one load attempt.
///
/// The explicit variant (rather than a logged `None`) keeps the drop
/// behavior observable: aggregators filter `Loaded` values and forward
/// every `Failed` to the diagnostic sink.
#[derive(Debug)]
pub enum LoadOutcome<U> {
    Loaded(U),
    Failed { path: PathBuf, error: LoadError },
}

impl<U> LoadOutcome<U> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The unit, if the load succeeded.
    pub fn into_unit(self) -> Option<U> {
        match self {
            Self::Loaded(unit) => Some(unit),
            Self::Failed { .. } => None,
        }
    }
}
