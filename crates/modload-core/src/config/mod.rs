//! Configuration for modload.
//! TOML-based via serde; options are caller-constructed and scoped to one
//! scan call, there is no persistent configuration state.

pub mod scan_options;

pub use scan_options::ScanOptions;
