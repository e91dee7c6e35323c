//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Install the process-wide tracing subscriber.
///
/// Reads the `BRIEFCHECK_LOG` environment variable for filtering
/// (e.g. `BRIEFCHECK_LOG=briefcheck_analysis=debug,info`), falling back to
/// `observability.log_level`. Output goes to stderr so reports written to
/// stdout stay machine-readable.
///
/// Idempotent: only the first call has any effect. Library code never calls
/// this; binaries call it once at startup.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        if config.json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
