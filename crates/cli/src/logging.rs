// crates/cli/src/logging.rs
use crate::args::LoggingOptions;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given flags. `RUST_LOG` takes precedence.
#[must_use]
pub const fn default_level(options: &LoggingOptions) -> &'static str {
    if options.quiet {
        return "error";
    }
    match options.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Records from the engine's `log` calls are
/// forwarded into it as well.
pub fn init(options: &LoggingOptions) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(options)));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
