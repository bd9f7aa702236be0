//! Logging initialization for the CLI.
//!
//! The relink library only emits tracing events; the subscriber is
//! installed here, once per process.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the global subscriber. `RUST_LOG` wins over the flags.
pub fn init(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(default_level.parse().expect("static filter directive"))
                .from_env_lossy()
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false).without_time())
            .init();
    });
}
