use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat, DEFAULT_FILTER};

/// `RUST_LOG` when set, otherwise `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the process-wide subscriber. Call once, before serving.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let filter = env_filter(DEFAULT_FILTER);

    match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .try_init(),
    }
    .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
