//! Log setup shared by the command-line tools.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr logger.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output from this crate when `verbose` is on. Report lines go to stdout and
/// are not affected.
pub fn init_cli_logger(verbose: bool) {
    let fallback = if verbose {
        "mock_migrate=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
