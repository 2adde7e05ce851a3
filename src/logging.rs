//! Diagnostic logging on stderr. User-facing output goes through
//! `ui::messages`; this is for request traces and troubleshooting.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise the configured level, raised to `debug`
/// by `--verbose`. Safe to call more than once.
pub fn init(config_level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { config_level };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("warn,obras={fallback}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
