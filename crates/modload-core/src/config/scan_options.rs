//! Scan options: recursion switch plus the name filter set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Options for one scan call.
///
/// All filter fields default to empty, which means no filtering. Matching is
/// case-insensitive and applies to the bare file name, never the full path.
/// `exclude` is evaluated after `prefix`/`postfix` and always wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Descend into subdirectories. Default false.
    pub recursive: bool,
    /// File name prefixes, OR-matched.
    pub prefix: Vec<String>,
    /// File name suffixes, OR-matched.
    pub postfix: Vec<String>,
    /// Exact file names to drop.
    pub exclude: Vec<String>,
}

impl ScanOptions {
    /// Options with recursion enabled and no filters.
    pub fn recursive() -> Self {
        Self {
            recursive: true,
            ..Default::default()
        }
    }

    /// Parse options from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let options: Self = toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Validate the option values.
    ///
    /// Filters are name-only; an entry containing a path separator can never
    /// match a bare file name and is almost certainly a caller mistake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, entries) in [
            ("prefix", &self.prefix),
            ("postfix", &self.postfix),
            ("exclude", &self.exclude),
        ] {
            if let Some(entry) = entries
                .iter()
                .find(|e| e.contains('/') || e.contains('\\'))
            {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: format!("filter entry {entry:?} must not contain a path separator"),
                });
            }
        }
        Ok(())
    }
}
