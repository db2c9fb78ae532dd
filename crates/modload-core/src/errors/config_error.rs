//! Configuration loading errors.

use super::error_code::{self, ModloadErrorCode};

/// Errors raised while loading or validating `ScanOptions`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read options file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid option {field}: {message}")]
    Validation { field: String, message: String },
}

impl ModloadErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse { .. } => error_code::CONFIG_PARSE,
            Self::Validation { .. } => error_code::CONFIG_VALIDATION,
        }
    }
}
