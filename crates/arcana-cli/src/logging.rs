//! Stderr logging for the CLI.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an explicit filter, e.g. `arcana_core=trace`.
pub const LOG_ENV: &str = "ARCANA_LOG";

/// Install the stderr subscriber. `--verbose` raises the default to debug.
pub fn init(verbose: bool) {
    let default = if verbose {
        "arcana=debug,arcana_core=debug,arcana_narrative=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
