//! Logging setup
//!
//! `RUST_LOG` wins over the configured level. Logs go to stderr so the
//! transcripts on stdout stay clean.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber; a second call is a no-op
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "model_referee={level},referee_core={level},referee_api={level},referee_tui={level},tower_http={level}"
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
