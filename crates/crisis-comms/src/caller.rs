//! Agent caller trait and HTTP implementation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::{AgentEndpoint, AgentRequest, CallError, Result};

/// Outbound call path to a downstream agent
///
/// Implementations handle HOW a request reaches an agent. The orchestrator
/// uses this interface without knowing the underlying mechanism. Callers
/// must be safe for concurrent invocation: parallel calls share no mutable
/// state that could corrupt one another's results.
///
/// This layer performs zero automatic retries. Retries, if ever wanted,
/// belong to the orchestrator.
#[async_trait]
pub trait AgentCaller: Send + Sync {
    /// Send a request to an agent and return the raw response envelope.
    ///
    /// The envelope is structurally a mapping that may carry the agent's
    /// structured payload at any of several nesting depths; see
    /// [`crate::extract_analysis`].
    async fn call(
        &self,
        endpoint: &AgentEndpoint,
        request: AgentRequest,
        timeout: Duration,
    ) -> Result<Value>;

    /// Get caller name
    fn name(&self) -> &str;
}

/// HTTP caller for agent communication
///
/// Posts the JSON-RPC envelope to the agent's address. The underlying
/// `reqwest::Client` is clone-cheap and safe for concurrent use.
#[derive(Clone)]
pub struct HttpCaller {
    client: Client,
}

impl HttpCaller {
    /// Create a new HTTP caller
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpCaller {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentCaller for HttpCaller {
    async fn call(
        &self,
        endpoint: &AgentEndpoint,
        request: AgentRequest,
        timeout: Duration,
    ) -> Result<Value> {
        let send = self
            .client
            .post(&endpoint.url)
            .json(&request.to_rpc())
            .send();

        let response = tokio::time::timeout(timeout, send)
            .await
            .map_err(|_| CallError::Timeout(timeout))?
            .map_err(|e| CallError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CallError::rejected(status.as_u16(), detail));
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| CallError::transport(format!("JSON parse error: {}", e)))?;

        Ok(envelope)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_caller_creation() {
        let caller = HttpCaller::new();
        assert_eq!(caller.name(), "http");
    }

    #[tokio::test]
    async fn test_call_to_unreachable_endpoint_is_transport_error() {
        let caller = HttpCaller::new();
        // Reserved TEST-NET address, nothing listens here
        let endpoint = AgentEndpoint::new("sentiment_analyst", "http://192.0.2.1:1/");
        let request = AgentRequest::text("m-1", "hello");

        let result = caller
            .call(&endpoint, request, Duration::from_millis(200))
            .await;

        match result {
            Err(CallError::Transport(_)) | Err(CallError::Timeout(_)) => {}
            other => panic!("Expected transport or timeout error, got {:?}", other),
        }
    }
}
