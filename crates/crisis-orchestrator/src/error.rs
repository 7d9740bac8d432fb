//! Error types for the orchestration core

use crisis_comms::CallError;
use crisis_core::CrisisError;

/// Result type for orchestration operations
pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Errors in the crisis orchestration pipeline
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// A source post record is missing a required field
    #[error("Post record {index} missing required field: {field}")]
    Validation { index: usize, field: String },

    /// The post feed could not be read
    #[error("Feed error: {0}")]
    Feed(String),

    /// A pipeline stage could not recover the analysis data it depends on
    #[error("Failed to extract analysis data: {0}")]
    MissingAnalysis(String),

    /// A new cycle was triggered while one is already in flight
    #[error("A crisis cycle is already in flight")]
    CycleInFlight,

    /// Downstream agent call failed
    #[error("Agent call failed: {0}")]
    Call(#[from] CallError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),

    /// Generic error from crisis-core
    #[error(transparent)]
    CoreError(#[from] CrisisError),
}

impl OrchestratorError {
    /// Create a validation error for a record index and field
    pub fn validation<S: Into<String>>(index: usize, field: S) -> Self {
        Self::Validation {
            index,
            field: field.into(),
        }
    }

    /// Create a feed error
    pub fn feed<S: Into<String>>(msg: S) -> Self {
        Self::Feed(msg.into())
    }

    /// Create a missing-analysis error
    pub fn missing_analysis<S: Into<String>>(msg: S) -> Self {
        Self::MissingAnalysis(msg.into())
    }

    /// Create a generic other error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_index_and_field() {
        let err = OrchestratorError::validation(3, "author");
        assert_eq!(
            err.to_string(),
            "Post record 3 missing required field: author"
        );
    }

    #[test]
    fn test_call_error_conversion() {
        let err: OrchestratorError =
            CallError::Timeout(std::time::Duration::from_secs(30)).into();
        assert!(matches!(err, OrchestratorError::Call(_)));
    }
}
