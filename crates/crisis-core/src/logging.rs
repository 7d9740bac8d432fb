//! Logging setup for the crisis pipeline
//!
//! Structured logging via the `tracing` crate, which is async-aware and
//! integrates with the rest of the tokio stack.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (e.g., "info", "debug", "trace")
    pub level: String,
    /// Whether to use JSON format (vs. human-readable)
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl From<&crate::config::LoggingConfig> for LogConfig {
    fn from(cfg: &crate::config::LoggingConfig) -> Self {
        Self {
            level: cfg.level.clone(),
            json: cfg.json,
        }
    }
}

/// Initialize logging for the application
///
/// Sets up a tracing subscriber with the specified configuration.
/// Should be called once at application startup.
pub fn init_logging(config: LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        // JSON format for production/structured logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init();
    } else {
        // Human-readable format for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .init();
    }

    tracing::info!("Logging initialized at level: {}", config.level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
    }

    #[test]
    fn test_from_logging_config() {
        let cfg = crate::config::LoggingConfig {
            level: "debug".to_string(),
            json: true,
        };
        let config = LogConfig::from(&cfg);
        assert_eq!(config.level, "debug");
        assert!(config.json);
    }
}
