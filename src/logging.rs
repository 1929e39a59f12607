//! Tracing setup for the CLI.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "GITAI_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a compact stderr subscriber filtered by `GITAI_LOG` (default `warn`).
///
/// Logs go to stderr so they never mix with the proposals on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
