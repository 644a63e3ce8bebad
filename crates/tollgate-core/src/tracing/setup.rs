//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TOLLGATE_LOG";

/// Initialize the Tollgate tracing/logging system.
///
/// Reads `TOLLGATE_LOG` for per-crate log levels, e.g.
/// `TOLLGATE_LOG=tollgate_analysis=debug,tollgate_storage=warn`.
///
/// Falls back to `tollgate=info` if `TOLLGATE_LOG` is not set or is invalid.
/// Logs go to stderr so command output on stdout stays parseable.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("tollgate=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false),
            )
            .with(filter)
            .init();
    });
}
