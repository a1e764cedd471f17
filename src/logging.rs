//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout for the
//! dashboard itself.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Fallback filter when the requested directive does not parse
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initializes the global tracing subscriber once
///
/// `directive` is an `EnvFilter` directive such as `debug` or
/// `budget_ledger=info`. Later calls are ignored.
pub fn init(directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_new(directive)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
