//! Stable machine-readable error codes.

/// Marker text carried by every fatal scan failure.
/// Callers pattern-match on this substring, so it must never change.
pub const INVALID_PATH_MARKER: &str = "INVALID PATH";

pub const SCAN_INVALID_PATH: &str = "SCAN_INVALID_PATH";
pub const SCAN_DIR_UNREADABLE: &str = "SCAN_DIR_UNREADABLE";

pub const LOAD_IO: &str = "LOAD_IO";
pub const LOAD_MALFORMED: &str = "LOAD_MALFORMED";
pub const LOAD_INIT: &str = "LOAD_INIT";

pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_VALIDATION: &str = "CONFIG_VALIDATION";

/// Maps an error to its stable machine-readable code.
pub trait ModloadErrorCode {
    fn error_code(&self) -> &'static str;
}
