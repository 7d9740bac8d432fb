//! Shared application state

use crisis_orchestrator::CrisisOrchestrator;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: CrisisOrchestrator,
    pub poll_interval: Duration,
    pub poll_attempts: u32,
}

impl AppState {
    pub fn new(
        orchestrator: CrisisOrchestrator,
        poll_interval: Duration,
        poll_attempts: u32,
    ) -> Self {
        Self {
            orchestrator,
            poll_interval,
            poll_attempts,
        }
    }
}
