//! Outbound agent request envelope
//!
//! Every downstream agent accepts the same message shape: an identifying
//! message id, a `user` role, and one or more text parts carrying the
//! natural-language instruction plus embedded data. On the wire this is
//! wrapped in a JSON-RPC `message/send` envelope.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One part of an agent message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePart {
    /// Part kind ("text" is the only kind the pipeline sends)
    #[serde(rename = "type")]
    pub kind: String,

    /// Text content
    pub text: String,
}

impl MessagePart {
    /// Create a text part
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Request sent to a downstream agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    /// Message id (for correlation)
    #[serde(rename = "messageId")]
    pub message_id: String,

    /// Sender role, always "user" for orchestrator-issued requests
    pub role: String,

    /// Message parts
    pub parts: Vec<MessagePart>,
}

impl AgentRequest {
    /// Create a single-text-part request
    pub fn text<S: Into<String>>(message_id: S, prompt: S) -> Self {
        Self {
            message_id: message_id.into(),
            role: "user".to_string(),
            parts: vec![MessagePart::text(prompt)],
        }
    }

    /// Wrap this request in its JSON-RPC wire envelope
    pub fn to_rpc(&self) -> Value {
        json!({
            "jsonrpc": "2.0",
            "method": "message/send",
            "params": { "message": self },
            "id": 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request() {
        let req = AgentRequest::text("crisis-t1-sentiment", "Analyze this");
        assert_eq!(req.message_id, "crisis-t1-sentiment");
        assert_eq!(req.role, "user");
        assert_eq!(req.parts.len(), 1);
        assert_eq!(req.parts[0].kind, "text");
    }

    #[test]
    fn test_multi_part_request_serializes_all_parts() {
        let mut req = AgentRequest::text("id", "first");
        req.parts.push(MessagePart::text("second"));

        let rpc = req.to_rpc();
        assert_eq!(rpc["params"]["message"]["parts"][1]["text"], "second");
    }

    #[test]
    fn test_rpc_envelope_shape() {
        let req = AgentRequest::text("m-1", "hello");
        let rpc = req.to_rpc();

        assert_eq!(rpc["jsonrpc"], "2.0");
        assert_eq!(rpc["method"], "message/send");
        assert_eq!(rpc["params"]["message"]["messageId"], "m-1");
        assert_eq!(rpc["params"]["message"]["role"], "user");
        assert_eq!(rpc["params"]["message"]["parts"][0]["type"], "text");
        assert_eq!(rpc["params"]["message"]["parts"][0]["text"], "hello");
    }
}
