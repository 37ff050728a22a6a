//! Structured logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `mcwarm=trace`
pub const LOG_ENV: &str = "MCWARM_LOG";

/// Default directive when `MCWARM_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,mcwarm=debug" } else { "warn" }
}

/// Install the global subscriber, writing to stderr.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
