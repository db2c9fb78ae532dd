//! Opt-in tracing initialization for embedding applications.
//!
//! Libraries only emit events; installing a subscriber is the host's call.
//! `init` wires a fmt subscriber filtered by the `MODLOAD_LOG` env var
//! (default `warn`) for hosts that do not bring their own.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the default log filter.
pub const LOG_ENV_VAR: &str = "MODLOAD_LOG";

/// Install the default fmt subscriber. Safe to call more than once;
/// subsequent calls (or an already-installed subscriber) are a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
