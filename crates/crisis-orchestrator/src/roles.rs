//! Pipeline roles and per-role lifecycle status

use serde::{Deserialize, Serialize};

/// The six fixed pipeline stage identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    EarToGround,
    SentimentAnalyst,
    FactChecker,
    RiskScore,
    LegalCounsel,
    PressSecretary,
}

impl AgentRole {
    /// All roles, in pipeline order
    pub const ALL: [AgentRole; 6] = [
        AgentRole::EarToGround,
        AgentRole::SentimentAnalyst,
        AgentRole::FactChecker,
        AgentRole::RiskScore,
        AgentRole::LegalCounsel,
        AgentRole::PressSecretary,
    ];

    /// Role identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::EarToGround => "ear_to_ground",
            AgentRole::SentimentAnalyst => "sentiment_analyst",
            AgentRole::FactChecker => "fact_checker",
            AgentRole::RiskScore => "risk_score",
            AgentRole::LegalCounsel => "legal_counsel",
            AgentRole::PressSecretary => "press_secretary",
        }
    }

    /// Parse a role identifier, `None` for unknown names
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of one pipeline role
///
/// Transitions: `Idle -> Active` on dispatch, `Active -> Complete | Error`
/// on call resolution. Only a cycle reset returns a role to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Idle,
    Active,
    Complete,
    Error,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Idle => "idle",
            AgentStatus::Active => "active",
            AgentStatus::Complete => "complete",
            AgentStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in AgentRole::ALL {
            assert_eq!(AgentRole::from_name(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_role_name() {
        assert_eq!(AgentRole::from_name("weather_forecaster"), None);
    }

    #[test]
    fn test_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&AgentRole::EarToGround).unwrap();
        assert_eq!(json, "\"ear_to_ground\"");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AgentStatus::Active.to_string(), "active");
        assert_eq!(AgentStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&AgentStatus::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
    }
}
