//! In-process caller with scripted responders
//!
//! Stands in for the real agent fleet during tests and local demos. Each
//! role id maps to a responder that replies, fails, or replies after a
//! delay (for exercising timeout paths).

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{AgentCaller, AgentEndpoint, AgentRequest, CallError, Result};

/// Scripted behavior for one agent role
#[derive(Debug, Clone)]
pub enum Responder {
    /// Return this envelope immediately
    Reply(Value),

    /// Fail with a transport error
    Fail(String),

    /// Sleep, then return this envelope (trips timeouts shorter than the delay)
    DelayedReply(Duration, Value),
}

/// In-process agent caller
///
/// Role-keyed responders plus an ordered log of dispatched calls, so tests
/// can assert which pipeline stages were (or were not) reached.
#[derive(Clone, Default)]
pub struct InProcessCaller {
    responders: Arc<DashMap<String, Responder>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl InProcessCaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a responder for a role id
    pub fn register<S: Into<String>>(&self, role_id: S, responder: Responder) {
        let role_id = role_id.into();
        tracing::debug!("Registered responder for agent: {}", role_id);
        self.responders.insert(role_id, responder);
    }

    /// Role ids of every call dispatched so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Whether a role was ever called
    pub fn was_called(&self, role_id: &str) -> bool {
        self.calls().iter().any(|c| c == role_id)
    }

    fn record_call(&self, role_id: &str) {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(role_id.to_string());
    }
}

#[async_trait]
impl AgentCaller for InProcessCaller {
    async fn call(
        &self,
        endpoint: &AgentEndpoint,
        _request: AgentRequest,
        timeout: Duration,
    ) -> Result<Value> {
        self.record_call(&endpoint.id);

        let responder = self
            .responders
            .get(&endpoint.id)
            .map(|r| r.clone())
            .ok_or_else(|| CallError::AgentNotFound(endpoint.id.clone()))?;

        match responder {
            Responder::Reply(envelope) => Ok(envelope),
            Responder::Fail(detail) => Err(CallError::transport(detail)),
            Responder::DelayedReply(delay, envelope) => {
                tokio::time::timeout(timeout, tokio::time::sleep(delay))
                    .await
                    .map_err(|_| CallError::Timeout(timeout))?;
                Ok(envelope)
            }
        }
    }

    fn name(&self) -> &str {
        "in_process"
    }
}
