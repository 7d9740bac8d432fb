//! Post-trigger monitoring
//!
//! After a trigger the gateway polls the orchestrator on a fixed cadence
//! until a final response appears or the attempt budget runs out. Budget
//! exhaustion is not an error: monitoring simply ends and the status
//! endpoint keeps serving whatever the pipeline produced.

use crisis_orchestrator::{CrisisOrchestrator, FinalCrisisResponse};
use std::time::Duration;

/// Poll the orchestrator until a final response appears or `attempts` polls
/// have elapsed.
pub async fn monitor(
    orchestrator: CrisisOrchestrator,
    interval: Duration,
    attempts: u32,
) -> Option<FinalCrisisResponse> {
    for attempt in 1..=attempts {
        tokio::time::sleep(interval).await;

        let snapshot = orchestrator.status();
        tracing::info!(
            "Crisis monitor poll {}/{}: status {}",
            attempt,
            attempts,
            snapshot.status
        );

        if let Some(response) = snapshot.final_response {
            tracing::info!("Final crisis response available after {} polls", attempt);
            return Some(response);
        }
    }

    tracing::info!(
        "Crisis monitoring complete, no final response within {} polls",
        attempts
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crisis_comms::{InProcessCaller, Responder};
    use crisis_orchestrator::{AgentEndpoints, PipelineConfig, SocialPost};
    use serde_json::{json, Map};
    use std::sync::Arc;

    fn orchestrator(caller: &InProcessCaller) -> CrisisOrchestrator {
        CrisisOrchestrator::new(
            Arc::new(caller.clone()),
            AgentEndpoints::local(),
            PipelineConfig::default(),
        )
    }

    fn post() -> SocialPost {
        SocialPost {
            id: "t1".to_string(),
            author: "reporter".to_string(),
            text: "Allegations surface".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            extra: Map::new(),
        }
    }

    fn wrapped(key: &str, payload: serde_json::Value) -> Responder {
        Responder::Reply(json!({"result": {"metadata": {key: payload}}}))
    }

    #[tokio::test(start_paused = true)]
    async fn monitor_finds_final_response() {
        let caller = InProcessCaller::new();
        caller.register(
            "sentiment_analyst",
            wrapped("sentiment_analysis", json!({"overall_sentiment": -0.5})),
        );
        caller.register(
            "fact_checker",
            wrapped("fact_check_analysis", json!({"overall_credibility": "low"})),
        );
        caller.register("risk_score", wrapped("risk_assessment", json!({"risk_score": 7.0})));
        caller.register("legal_counsel", wrapped("legal_review", json!({"approved": true})));
        caller.register(
            "press_secretary",
            wrapped("press_response", json!({"tone": "measured", "confidence": 0.9})),
        );

        let orch = orchestrator(&caller);
        orch.run_cycle(&[post()]).await.unwrap();

        let found = monitor(orch, Duration::from_secs(10), 6).await;
        assert_eq!(found.unwrap().tone, "measured");
    }

    #[tokio::test(start_paused = true)]
    async fn monitor_gives_up_after_attempt_budget() {
        let caller = InProcessCaller::new();
        let orch = orchestrator(&caller);

        let found = monitor(orch, Duration::from_secs(10), 6).await;
        assert!(found.is_none());
    }
}
