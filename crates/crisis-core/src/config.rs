//! Configuration management for the crisis pipeline
//!
//! Configuration is loaded from multiple sources:
//! - Default values
//! - Configuration files (TOML, JSON, YAML)
//! - Environment variables (`CRISIS__` prefix)

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the crisis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Social-post feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Downstream agent endpoints and call budgets
    #[serde(default)]
    pub agents: AgentsConfig,

    /// Gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format
    #[serde(default)]
    pub json: bool,
}

/// Social-post feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Path to the JSON file of social-post records
    #[serde(default = "default_feed_file")]
    pub file: String,

    /// Seconds between posts when processing more than one per cycle
    #[serde(default = "default_post_rate")]
    pub post_rate_secs: f64,

    /// Maximum posts processed per cycle
    #[serde(default = "default_post_limit")]
    pub post_limit: usize,
}

/// Downstream agent endpoints and call budgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default = "default_sentiment_url")]
    pub sentiment_analyst_url: String,

    #[serde(default = "default_fact_checker_url")]
    pub fact_checker_url: String,

    #[serde(default = "default_risk_score_url")]
    pub risk_score_url: String,

    #[serde(default = "default_legal_counsel_url")]
    pub legal_counsel_url: String,

    #[serde(default = "default_press_secretary_url")]
    pub press_secretary_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_call_timeout")]
    pub call_timeout_secs: u64,

    /// Shared budget for the sentiment/fact-check fan-out, in seconds
    #[serde(default = "default_fan_out_timeout")]
    pub fan_out_timeout_secs: u64,
}

/// Gateway settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Listen port
    #[serde(default = "default_gateway_port")]
    pub port: u16,

    /// Seconds between status polls after a trigger
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Poll attempts before giving up
    #[serde(default = "default_poll_attempts")]
    pub poll_attempts: u32,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_feed_file() -> String {
    "data/posts.json".to_string()
}

fn default_post_rate() -> f64 {
    2.0
}

fn default_post_limit() -> usize {
    1
}

fn default_sentiment_url() -> String {
    "http://sentiment-analyst:9002".to_string()
}

fn default_fact_checker_url() -> String {
    "http://fact-checker:9004".to_string()
}

fn default_risk_score_url() -> String {
    "http://risk-score:9003".to_string()
}

fn default_legal_counsel_url() -> String {
    "http://legal-counsel:9005".to_string()
}

fn default_press_secretary_url() -> String {
    "http://press-secretary:9006".to_string()
}

fn default_call_timeout() -> u64 {
    30
}

fn default_fan_out_timeout() -> u64 {
    30
}

fn default_gateway_port() -> u16 {
    8000
}

fn default_poll_interval() -> u64 {
    10
}

fn default_poll_attempts() -> u32 {
    6
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            file: default_feed_file(),
            post_rate_secs: default_post_rate(),
            post_limit: default_post_limit(),
        }
    }
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            sentiment_analyst_url: default_sentiment_url(),
            fact_checker_url: default_fact_checker_url(),
            risk_score_url: default_risk_score_url(),
            legal_counsel_url: default_legal_counsel_url(),
            press_secretary_url: default_press_secretary_url(),
            call_timeout_secs: default_call_timeout(),
            fan_out_timeout_secs: default_fan_out_timeout(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_gateway_port(),
            poll_interval_secs: default_poll_interval(),
            poll_attempts: default_poll_attempts(),
        }
    }
}

impl Default for CrisisConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            feed: FeedConfig::default(),
            agents: AgentsConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

/// Load configuration from a file
///
/// Supports TOML, JSON, and YAML formats based on file extension.
/// Environment variables with the `CRISIS__` prefix override file values.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CrisisConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(crate::error::CrisisError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("CRISIS").separator("__"))
        .build()?;

    let config: CrisisConfig = settings.try_deserialize()?;

    tracing::info!("Configuration loaded from {}", path.display());

    Ok(config)
}

/// Load configuration with defaults if the file doesn't exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> CrisisConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            CrisisConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CrisisConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.feed.post_limit, 1);
        assert_eq!(config.agents.call_timeout_secs, 30);
        assert_eq!(config.gateway.poll_attempts, 6);
    }

    #[test]
    fn test_config_serialization() {
        let config = CrisisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CrisisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.feed.file, deserialized.feed.file);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "logging": { "level": "debug", "json": true },
            "feed": { "file": "data/custom.json", "post_rate_secs": 1.5, "post_limit": 3 },
            "agents": { "call_timeout_secs": 10 },
            "gateway": { "port": 9000 }
        }"#;

        let config: CrisisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.feed.post_limit, 3);
        assert_eq!(config.agents.call_timeout_secs, 10);
        // Unspecified fields keep their defaults
        assert_eq!(config.agents.fan_out_timeout_secs, 30);
        assert_eq!(config.gateway.port, 9000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default() {
        let config = load_config_or_default("nonexistent.toml");
        assert_eq!(config.feed.post_limit, 1);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[feed]\nfile = \"data/other.json\"\npost_limit = 5\n\n[gateway]\npoll_interval_secs = 2"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.feed.file, "data/other.json");
        assert_eq!(config.feed.post_limit, 5);
        assert_eq!(config.gateway.poll_interval_secs, 2);
    }
}
