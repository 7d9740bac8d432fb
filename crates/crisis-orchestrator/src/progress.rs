//! Agent progress and result tracking

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{AgentRole, AgentStatus, AnalysisData};

/// Per-role lifecycle status and last produced result for one orchestrator
///
/// Writes are role-keyed, so concurrent pipeline branches for different
/// roles never race on the same entry. Reads return snapshots; callers
/// cannot mutate orchestrator state through them.
#[derive(Clone)]
pub struct ProgressStore {
    statuses: Arc<DashMap<AgentRole, AgentStatus>>,
    results: Arc<DashMap<AgentRole, AnalysisData>>,
}

impl ProgressStore {
    pub fn new() -> Self {
        let statuses = DashMap::new();
        for role in AgentRole::ALL {
            statuses.insert(role, AgentStatus::Idle);
        }
        Self {
            statuses: Arc::new(statuses),
            results: Arc::new(DashMap::new()),
        }
    }

    /// Set a role's status
    pub fn set_status(&self, role: AgentRole, status: AgentStatus) {
        tracing::info!("Agent {} status: {}", role, status);
        self.statuses.insert(role, status);
    }

    /// Set a role's status by name; unknown names are logged and ignored
    pub fn set_status_named(&self, name: &str, status: AgentStatus) {
        match AgentRole::from_name(name) {
            Some(role) => self.set_status(role, status),
            None => tracing::warn!("Unknown agent role: {}", name),
        }
    }

    /// Get a role's current status
    pub fn status(&self, role: AgentRole) -> AgentStatus {
        self.statuses
            .get(&role)
            .map(|s| *s)
            .unwrap_or(AgentStatus::Idle)
    }

    /// Store a role's result
    pub fn set_result(&self, role: AgentRole, result: AnalysisData) {
        tracing::info!("Agent {} result stored", role);
        self.results.insert(role, result);
    }

    /// Get a role's last result, if any
    pub fn result(&self, role: AgentRole) -> Option<AnalysisData> {
        self.results.get(&role).map(|r| r.clone())
    }

    /// Snapshot of all role statuses
    pub fn progress(&self) -> BTreeMap<String, AgentStatus> {
        AgentRole::ALL
            .into_iter()
            .map(|role| (role.as_str().to_string(), self.status(role)))
            .collect()
    }

    /// Snapshot of all stored results
    pub fn results(&self) -> BTreeMap<String, AnalysisData> {
        self.results
            .iter()
            .map(|entry| (entry.key().as_str().to_string(), entry.value().clone()))
            .collect()
    }

    /// Reset every role to idle and clear all results
    ///
    /// Called once at the top of each orchestration cycle.
    pub fn reset(&self) {
        for role in AgentRole::ALL {
            self.statuses.insert(role, AgentStatus::Idle);
        }
        self.results.clear();
        tracing::info!("All agents reset to idle state");
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result() -> AnalysisData {
        AnalysisData::from_value(json!({"overall_sentiment": 0.2}))
    }

    #[test]
    fn test_all_roles_start_idle() {
        let store = ProgressStore::new();
        for role in AgentRole::ALL {
            assert_eq!(store.status(role), AgentStatus::Idle);
        }
    }

    #[test]
    fn test_status_transition() {
        let store = ProgressStore::new();
        store.set_status(AgentRole::FactChecker, AgentStatus::Active);
        assert_eq!(store.status(AgentRole::FactChecker), AgentStatus::Active);

        store.set_status(AgentRole::FactChecker, AgentStatus::Complete);
        assert_eq!(store.status(AgentRole::FactChecker), AgentStatus::Complete);
    }

    #[test]
    fn test_unknown_role_name_is_ignored() {
        let store = ProgressStore::new();
        store.set_status_named("weather_forecaster", AgentStatus::Active);
        // No entry was created and existing roles are untouched
        assert_eq!(store.progress().len(), AgentRole::ALL.len());
    }

    #[test]
    fn test_known_role_name() {
        let store = ProgressStore::new();
        store.set_status_named("legal_counsel", AgentStatus::Complete);
        assert_eq!(store.status(AgentRole::LegalCounsel), AgentStatus::Complete);
    }

    #[test]
    fn test_reset_clears_state() {
        let store = ProgressStore::new();
        store.set_status(AgentRole::SentimentAnalyst, AgentStatus::Complete);
        store.set_result(AgentRole::SentimentAnalyst, sample_result());

        store.reset();

        for role in AgentRole::ALL {
            assert_eq!(store.status(role), AgentStatus::Idle);
        }
        assert!(store.result(AgentRole::SentimentAnalyst).is_none());
        assert!(store.results().is_empty());
    }

    #[test]
    fn test_progress_snapshot_is_a_copy() {
        let store = ProgressStore::new();
        let mut snapshot = store.progress();
        snapshot.insert("sentiment_analyst".to_string(), AgentStatus::Error);

        // Mutating the snapshot does not touch the store
        assert_eq!(store.status(AgentRole::SentimentAnalyst), AgentStatus::Idle);
    }

    #[test]
    fn test_result_round_trip() {
        let store = ProgressStore::new();
        store.set_result(AgentRole::RiskScore, sample_result());

        let result = store.result(AgentRole::RiskScore).unwrap();
        assert_eq!(result.data()["overall_sentiment"], 0.2);
    }
}
