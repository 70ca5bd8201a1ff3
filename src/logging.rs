//! Logging configuration.
//!
//! Diagnostics go to stderr through `tracing` so they never mix with the game
//! drawn on stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging
///
/// `RUST_LOG` takes precedence. Without it the level is `warn`, or `debug`
/// when `verbose` is set.
///
/// # Example
///
/// ```no_run
/// hangman::logging::init(false);
/// tracing::warn!("only warnings and errors are shown by default");
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "hangman=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
