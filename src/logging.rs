//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::{PlannerError, Result};

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level; `verbose`
/// raises the configured level to `debug`.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| PlannerError::config(format!("Invalid log filter '{level}': {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| PlannerError::general(format!("logger init failed: {e}")))
}
