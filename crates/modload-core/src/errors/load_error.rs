//! Per-file load failures. Always recovered locally: logged to the
//! diagnostic sink and dropped from the result set, never fatal.

use std::path::PathBuf;

use super::error_code::{self, ModloadErrorCode};

/// A single file failed to resolve into an in-memory unit.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("cannot read module {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a valid module.
    #[error("malformed module {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    /// The module resolved but failed during initialization.
    #[error("module {} failed to initialize: {message}", .path.display())]
    Init { path: PathBuf, message: String },
}

impl LoadError {
    /// Path of the file this failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Malformed { path, .. } | Self::Init { path, .. } => path,
        }
    }
}

impl ModloadErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::LOAD_IO,
            Self::Malformed { .. } => error_code::LOAD_MALFORMED,
            Self::Init { .. } => error_code::LOAD_INIT,
        }
    }
}
