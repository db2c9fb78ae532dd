//! modload: filtered directory discovery and module loading.
//!
//! Recursively discovers files in a directory tree under configurable name
//! filters (`prefix` / `postfix` / `exclude`, case-insensitive, name-only)
//! and optionally loads each discovered file as a module through an
//! injected [`ModuleResolver`], aggregating the successfully loaded units.
//!
//! Two parallel namespaces implement the same contract:
//! - the crate root: suspending (`tokio::fs`) operations
//! - [`blocking`]: every filesystem read blocks the calling thread
//!
//! Both walk depth-first in filesystem listing order and return the full
//! sequence at once. The scan root being missing or unreadable is the only
//! fatal error (its message carries the `INVALID PATH` marker); individual
//! load failures are reported to a [`DiagnosticSink`] and dropped.
//!
//! ```no_run
//! use modload::{load_modules, resolvers::JsonResolver, ScanOptions};
//!
//! # async fn demo() -> Result<(), modload::ScanError> {
//! let options = ScanOptions {
//!     recursive: true,
//!     postfix: vec!["service.js".into()],
//!     ..Default::default()
//! };
//! let units = load_modules("./plugins", &options, &JsonResolver).await?;
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod resolvers;

mod loader;
mod scanner;

pub use loader::{load_modules, load_modules_with_sink, try_load};
pub use scanner::{get_all_files, get_all_files_recursive};

// Re-exports for convenience
pub use modload_core::{
    CollectingSink, ConfigError, DiagnosticSink, LoadError, LoadFailure, LoadOutcome,
    ModloadErrorCode, ModuleResolver, NameFilter, ScanError, ScanOptions, TracingSink,
};
