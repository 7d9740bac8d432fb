//! Response payload extraction
//!
//! Different agents and transport adapters wrap their structured payload at
//! different nesting depths: directly on the envelope, under a `metadata`
//! wrapper, or buried in `result.message.metadata`. Rather than hard-coding
//! every path, extraction tries the known shapes first and falls back to a
//! generic recursive search, so the happy paths are statically checked and
//! only shape drift pays the dynamic-search cost.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Known wrapper shape: JSON-RPC result carrying a message with metadata
#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: MessageBody,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    metadata: Map<String, Value>,
}

/// Extract the named analysis payload from an agent response envelope.
///
/// Search order, first match wins:
/// 1. direct top-level key
/// 2. the conventional `result.metadata` wrapper
/// 3. depth-first recursive search over every mapping- and list-valued child
///
/// A miss returns an empty mapping (never an error) and logs at debug level;
/// callers treat "analysis not found" as an explicit soft-fail check. A hit
/// whose value is not a mapping is wrapped under `raw_text` so downstream
/// dictionary access is always legal.
pub fn extract_analysis(envelope: &Value, key: &str) -> Map<String, Value> {
    match find(envelope, key) {
        Some(Value::Object(map)) => map.clone(),
        Some(other) => {
            let mut wrapped = Map::new();
            wrapped.insert("raw_text".to_string(), other.clone());
            wrapped
        }
        None => {
            tracing::debug!("Could not extract {} from agent response", key);
            Map::new()
        }
    }
}

fn find<'a>(envelope: &'a Value, key: &str) -> Option<&'a Value> {
    // Shape A: direct top-level key
    if let Some(found) = envelope.get(key) {
        return Some(found);
    }

    // Shape B: typed result.metadata wrapper
    if let Ok(rpc) = RpcEnvelope::deserialize(envelope) {
        if rpc.result.metadata.contains_key(key) {
            // Re-borrow from the envelope; the typed decode only proved the path
            if let Some(found) = envelope
                .get("result")
                .and_then(|r| r.get("metadata"))
                .and_then(|m| m.get(key))
            {
                return Some(found);
            }
        }
    }

    // Fallback: generic recursive search
    search(envelope, key)
}

fn search<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => {
            // Direct hit
            if let Some(found) = map.get(key) {
                return Some(found);
            }
            // Metadata path
            if let Some(Value::Object(metadata)) = map.get("metadata") {
                if let Some(found) = metadata.get(key) {
                    return Some(found);
                }
            }
            // Recurse on values
            map.values().find_map(|v| search(v, key))
        }
        Value::Array(items) => items.iter().find_map(|v| search(v, key)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_key() {
        let envelope = json!({"sentiment_analysis": {"overall_sentiment": -0.8}});
        let found = extract_analysis(&envelope, "sentiment_analysis");
        assert_eq!(found["overall_sentiment"], -0.8);
    }

    #[test]
    fn test_metadata_wrapper() {
        let envelope = json!({"metadata": {"risk_assessment": {"risk_score": 8.5}}});
        let found = extract_analysis(&envelope, "risk_assessment");
        assert_eq!(found["risk_score"], 8.5);
    }

    #[test]
    fn test_rpc_result_metadata_path() {
        let envelope = json!({
            "jsonrpc": "2.0",
            "result": {
                "kind": "message",
                "metadata": {"legal_review": {"legal_risk": "high"}}
            }
        });
        let found = extract_analysis(&envelope, "legal_review");
        assert_eq!(found["legal_risk"], "high");
    }

    #[test]
    fn test_deeply_nested_in_message() {
        let envelope =
            json!({"result": {"message": {"metadata": {"sentiment_analysis": {"overall_sentiment": 0.3}}}}});
        let found = extract_analysis(&envelope, "sentiment_analysis");
        assert_eq!(found["overall_sentiment"], 0.3);
    }

    #[test]
    fn test_nested_in_list() {
        let envelope = json!({"parts": [
            {"kind": "text", "text": "hello"},
            {"fact_check_analysis": {"overall_credibility": "low"}}
        ]});
        let found = extract_analysis(&envelope, "fact_check_analysis");
        assert_eq!(found["overall_credibility"], "low");
    }

    #[test]
    fn test_miss_returns_empty_mapping() {
        let envelope = json!({"result": {"parts": [{"text": "nothing here"}]}});
        let found = extract_analysis(&envelope, "press_response");
        assert!(found.is_empty());
    }

    #[test]
    fn test_miss_on_scalar_envelope() {
        let envelope = json!("bare string");
        assert!(extract_analysis(&envelope, "anything").is_empty());
    }

    #[test]
    fn test_non_mapping_hit_is_wrapped() {
        let envelope = json!({"risk_assessment": "score unavailable"});
        let found = extract_analysis(&envelope, "risk_assessment");
        assert_eq!(found["raw_text"], "score unavailable");
    }

    #[test]
    fn test_first_match_wins() {
        // Top-level key shadows any nested occurrence
        let envelope = json!({
            "sentiment_analysis": {"overall_sentiment": 0.1},
            "result": {"metadata": {"sentiment_analysis": {"overall_sentiment": 0.9}}}
        });
        let found = extract_analysis(&envelope, "sentiment_analysis");
        assert_eq!(found["overall_sentiment"], 0.1);
    }
}
