//! modload-core: types, traits, errors, config, and tracing for modload.
//!
//! This crate carries everything the pipelines share:
//! - Config: `ScanOptions` (recursion + name filters), TOML-loadable
//! - Filter: `NameFilter`, the compiled case-folded filter set
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Traits: `ModuleResolver` (injected loading mechanism) and
//!   `DiagnosticSink` (operator-visible per-file failure channel)

pub mod config;
pub mod errors;
pub mod filter;
pub mod trace;
pub mod traits;

// Re-exports for convenience
pub use config::ScanOptions;
pub use errors::{ConfigError, LoadError, ModloadErrorCode, ScanError};
pub use filter::NameFilter;
pub use traits::{
    CollectingSink, DiagnosticSink, LoadFailure, LoadOutcome, ModuleResolver, TracingSink,
};
