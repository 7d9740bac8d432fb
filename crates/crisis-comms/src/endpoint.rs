//! Agent endpoint identities

use serde::{Deserialize, Serialize};

/// Identity of a downstream agent: a role id plus the address it resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEndpoint {
    /// Role identifier (e.g. "sentiment_analyst")
    pub id: String,

    /// Network address for the agent
    pub url: String,
}

impl AgentEndpoint {
    /// Create a new endpoint
    pub fn new<S: Into<String>>(id: S, url: S) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

impl std::fmt::Display for AgentEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_creation() {
        let ep = AgentEndpoint::new("fact_checker", "http://fact-checker:9004");
        assert_eq!(ep.id, "fact_checker");
        assert_eq!(ep.url, "http://fact-checker:9004");
    }

    #[test]
    fn test_endpoint_display() {
        let ep = AgentEndpoint::new("risk_score", "http://risk-score:9003");
        assert_eq!(ep.to_string(), "risk_score (http://risk-score:9003)");
    }

    #[test]
    fn test_endpoint_serialization() {
        let ep = AgentEndpoint::new("legal_counsel", "http://legal-counsel:9005");
        let json = serde_json::to_string(&ep).unwrap();
        let deserialized: AgentEndpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ep);
    }
}
