//! Error types for agent calls

use crisis_core::CrisisError;

/// Result type for call operations
pub type Result<T> = std::result::Result<T, CallError>;

/// Errors when calling a downstream agent
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// No responder/route for the target agent
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// The call exceeded its timeout budget
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The agent rejected the request (non-2xx)
    #[error("Agent rejected request with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// Transport-level failure (connection refused, protocol error)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed response body
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),

    /// Generic error from crisis-core
    #[error(transparent)]
    CoreError(#[from] CrisisError),
}

impl CallError {
    /// Create a transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a rejection error
    pub fn rejected<S: Into<String>>(status: u16, detail: S) -> Self {
        Self::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Create a generic other error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Whether this failure was a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
