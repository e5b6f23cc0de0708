use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging to stderr. Stdout is reserved for report output.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `info`, or
/// `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let crate_level = if verbose { "debug" } else { "info" };

    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(format!("warn,roster_atlas={}", crate_level)),
    };

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
