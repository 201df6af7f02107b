//! # Structured Logging
//!
//! Installs the global `tracing` subscriber. Output goes to stderr so the
//! transcoded document on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::core::error::{TranscoderError, TranscoderResult};
use crate::observability::config::{LogConfig, LogFormat};

/// Levels accepted in `LogConfig::level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Build the filter: `RUST_LOG` wins when set, otherwise the configured level.
pub fn env_filter(config: &LogConfig) -> TranscoderResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| TranscoderError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Initialize logging for the process. Fails if a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> TranscoderResult<()> {
    let filter = env_filter(config)?;
    let registry = Registry::default().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr).with_current_span(false))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr).with_target(false))
            .try_init(),
    };

    result.map_err(|e| TranscoderError::config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_known_levels() {
        for level in LOG_LEVELS {
            let config = LogConfig {
                level: level.to_string(),
                format: LogFormat::Text,
            };
            assert!(env_filter(&config).is_ok(), "level {level} should parse");
        }
    }
}
