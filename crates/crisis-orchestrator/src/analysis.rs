//! Per-agent analysis payloads
//!
//! Agents that fail their own schema validation return a degraded payload
//! shaped like their normal schema (with an embedded `error` key) instead
//! of failing the call. The orchestrator tags that case explicitly at the
//! boundary so downstream code never has to re-inspect fields to tell
//! "agent degraded" apart from "agent succeeded".

use serde::Serialize;
use serde_json::{Map, Value};

/// The extracted payload produced by one agent call
///
/// Always mapping-backed: a non-mapping payload is wrapped under `raw_text`
/// so dictionary access stays legal downstream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnalysisData {
    /// The agent produced its normal payload
    Complete { data: Map<String, Value> },

    /// The agent ran but returned a schema-degraded payload
    Degraded {
        data: Map<String, Value>,
        reason: String,
    },
}

impl AnalysisData {
    /// Tag an extracted mapping as complete or degraded
    pub fn classify(data: Map<String, Value>) -> Self {
        match data.get("error") {
            Some(err) => {
                let reason = match err {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Self::Degraded { data, reason }
            }
            None => Self::Complete { data },
        }
    }

    /// Build from an arbitrary value, wrapping non-mappings under `raw_text`
    pub fn from_value(value: Value) -> Self {
        let data = match value {
            Value::Object(map) => map,
            other => {
                let mut wrapped = Map::new();
                wrapped.insert("raw_text".to_string(), other);
                wrapped
            }
        };
        Self::classify(data)
    }

    /// The underlying payload mapping
    pub fn data(&self) -> &Map<String, Value> {
        match self {
            Self::Complete { data } => data,
            Self::Degraded { data, .. } => data,
        }
    }

    /// Whether this payload was tagged degraded
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_classify_complete() {
        let data = as_map(json!({"overall_sentiment": -0.8}));
        let analysis = AnalysisData::classify(data);
        assert!(!analysis.is_degraded());
        assert_eq!(analysis.data()["overall_sentiment"], -0.8);
    }

    #[test]
    fn test_classify_degraded_on_error_key() {
        let data = as_map(json!({"risk_score": 5.0, "error": "schema validation failed"}));
        let analysis = AnalysisData::classify(data);
        assert!(analysis.is_degraded());
        match analysis {
            AnalysisData::Degraded { reason, .. } => {
                assert_eq!(reason, "schema validation failed");
            }
            _ => panic!("expected degraded"),
        }
    }

    #[test]
    fn test_from_value_wraps_non_mapping() {
        let analysis = AnalysisData::from_value(json!("just some text"));
        assert_eq!(analysis.data()["raw_text"], "just some text");
        assert!(!analysis.is_degraded());
    }

    #[test]
    fn test_from_value_wraps_null() {
        let analysis = AnalysisData::from_value(Value::Null);
        assert!(analysis.data().contains_key("raw_text"));
    }
}
