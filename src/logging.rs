use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Initialize tracing to stderr (stdout carries the HTML).
///
/// `RUST_LOG` takes precedence over the command-line verbosity.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(verbosity.level().into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
