//! Error handling for modload.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::ModloadErrorCode;
pub use load_error::LoadError;
pub use scan_error::ScanError;
