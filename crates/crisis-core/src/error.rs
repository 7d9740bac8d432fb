//! Foundation error type
//!
//! The foundation owns exactly one fallible concern: configuration.
//! Domain errors (agent calls, pipeline stages) live in the crates that
//! own them and chain back here transparently.

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CrisisError>;

/// Base error type shared by the pipeline crates
#[derive(Debug, thiserror::Error)]
pub enum CrisisError {
    /// Missing or unreadable configuration source
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration contents failed to parse or deserialize
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl CrisisError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
