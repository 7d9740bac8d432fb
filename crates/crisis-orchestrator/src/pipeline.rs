//! The crisis orchestrator
//!
//! One `CrisisOrchestrator` instance owns the whole per-cycle context:
//! agent endpoints, progress store, cycle state machine, and the final
//! response slot. State lives on the instance (cheaply clonable handles),
//! so independent orchestrators never cross-contaminate.
//!
//! Pipeline shape per post:
//!
//! ```text
//! intake -> {sentiment, fact_check} in parallel (shared timeout)
//!        -> risk_score  (needs both analyses)
//!        -> legal_counsel (fed the fact-check output, with envelope fallback)
//!        -> press_secretary synthesis (needs everything)
//!        -> final response stored for the gateway poller
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::task::JoinError;

use crisis_comms::{extract_analysis, AgentCaller, AgentEndpoint, AgentRequest, CallError};
use crisis_core::config::{AgentsConfig, CrisisConfig};

use crate::{
    error::{OrchestratorError, Result},
    feed::{load_posts, SocialPost},
    intent::{classify_intent, Intent},
    AgentRole, AgentStatus, AnalysisData, CrisisEvent, FinalCrisisResponse, ProgressStore,
};

/// Per-role endpoints for the five downstream agents
#[derive(Debug, Clone)]
pub struct AgentEndpoints {
    pub sentiment_analyst: AgentEndpoint,
    pub fact_checker: AgentEndpoint,
    pub risk_score: AgentEndpoint,
    pub legal_counsel: AgentEndpoint,
    pub press_secretary: AgentEndpoint,
}

impl AgentEndpoints {
    /// Build endpoints from configuration
    pub fn from_config(config: &AgentsConfig) -> Self {
        Self {
            sentiment_analyst: AgentEndpoint::new(
                AgentRole::SentimentAnalyst.as_str(),
                config.sentiment_analyst_url.as_str(),
            ),
            fact_checker: AgentEndpoint::new(
                AgentRole::FactChecker.as_str(),
                config.fact_checker_url.as_str(),
            ),
            risk_score: AgentEndpoint::new(
                AgentRole::RiskScore.as_str(),
                config.risk_score_url.as_str(),
            ),
            legal_counsel: AgentEndpoint::new(
                AgentRole::LegalCounsel.as_str(),
                config.legal_counsel_url.as_str(),
            ),
            press_secretary: AgentEndpoint::new(
                AgentRole::PressSecretary.as_str(),
                config.press_secretary_url.as_str(),
            ),
        }
    }

    /// Endpoints for an in-process caller (role ids only, no addresses)
    pub fn local() -> Self {
        let local = |role: AgentRole| AgentEndpoint::new(role.as_str(), "local");
        Self {
            sentiment_analyst: local(AgentRole::SentimentAnalyst),
            fact_checker: local(AgentRole::FactChecker),
            risk_score: local(AgentRole::RiskScore),
            legal_counsel: local(AgentRole::LegalCounsel),
            press_secretary: local(AgentRole::PressSecretary),
        }
    }
}

/// Pipeline tuning knobs
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the JSON post feed
    pub feed_file: String,

    /// Maximum posts processed per cycle (0 = all)
    pub post_limit: usize,

    /// Pause between posts when processing more than one
    pub post_rate: Duration,

    /// Per-call timeout for each agent call
    pub call_timeout: Duration,

    /// Shared budget for the sentiment/fact-check fan-out
    pub fan_out_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            feed_file: "data/posts.json".to_string(),
            post_limit: 1,
            post_rate: Duration::from_secs(2),
            call_timeout: Duration::from_secs(30),
            fan_out_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&CrisisConfig> for PipelineConfig {
    fn from(config: &CrisisConfig) -> Self {
        Self {
            feed_file: config.feed.file.clone(),
            post_limit: config.feed.post_limit,
            post_rate: Duration::from_secs_f64(config.feed.post_rate_secs),
            call_timeout: Duration::from_secs(config.agents.call_timeout_secs),
            fan_out_timeout: Duration::from_secs(config.agents.fan_out_timeout_secs),
        }
    }
}

/// Cycle state machine
///
/// A cycle is "in flight" from `Dispatched` through `Synthesizing`; a new
/// trigger in that window is rejected rather than racing the final
/// response slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleState {
    Idle,
    Dispatched,
    FannedOut,
    RiskPending,
    LegalPending,
    Synthesizing,
    Done,
    Failed,
}

impl CycleState {
    /// Whether a cycle is currently running
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            CycleState::Dispatched
                | CycleState::FannedOut
                | CycleState::RiskPending
                | CycleState::LegalPending
                | CycleState::Synthesizing
        )
    }

    /// Map to the gateway-facing status vocabulary
    pub fn as_gateway_status(&self) -> &'static str {
        match self {
            CycleState::Idle => "idle",
            CycleState::Done => "complete",
            CycleState::Failed => "error",
            _ => "active",
        }
    }
}

/// Gateway-facing status snapshot
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub crisis_id: Option<String>,
    pub status: String,
    pub started_at: Option<DateTime<Utc>>,
    pub final_response: Option<FinalCrisisResponse>,
    pub last_update: Option<DateTime<Utc>>,
    pub agent_progress: BTreeMap<String, AgentStatus>,
}

/// Reply to an inbound free-text prompt
#[derive(Debug, Clone, Serialize)]
pub struct PromptReply {
    pub text: String,
    pub final_response: Option<FinalCrisisResponse>,
}

/// Drives the crisis analysis pipeline
#[derive(Clone)]
pub struct CrisisOrchestrator {
    caller: Arc<dyn AgentCaller>,
    endpoints: AgentEndpoints,
    config: PipelineConfig,
    progress: ProgressStore,
    final_response: Arc<RwLock<Option<FinalCrisisResponse>>>,
    state: Arc<Mutex<CycleState>>,
    current_crisis: Arc<RwLock<Option<String>>>,
    started_at: Arc<RwLock<Option<DateTime<Utc>>>>,
    last_update: Arc<RwLock<Option<DateTime<Utc>>>>,
}

impl CrisisOrchestrator {
    pub fn new(
        caller: Arc<dyn AgentCaller>,
        endpoints: AgentEndpoints,
        config: PipelineConfig,
    ) -> Self {
        Self {
            caller,
            endpoints,
            config,
            progress: ProgressStore::new(),
            final_response: Arc::new(RwLock::new(None)),
            state: Arc::new(Mutex::new(CycleState::Idle)),
            current_crisis: Arc::new(RwLock::new(None)),
            started_at: Arc::new(RwLock::new(None)),
            last_update: Arc::new(RwLock::new(None)),
        }
    }

    /// The progress/result store for this orchestrator
    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    /// Current cycle state
    pub fn cycle_state(&self) -> CycleState {
        *self.state.lock().expect("cycle state lock poisoned")
    }

    /// The last stored final response, if any
    pub fn final_response(&self) -> Option<FinalCrisisResponse> {
        self.final_response
            .read()
            .expect("final response lock poisoned")
            .clone()
    }

    /// Clear the stored final response and reset all agent progress
    ///
    /// Invoked when a new crisis cycle is about to start.
    pub fn clear_final_response(&self) {
        tracing::info!("Clearing previous final response for new crisis");
        *self
            .final_response
            .write()
            .expect("final response lock poisoned") = None;
        self.progress.reset();
    }

    /// Gateway-facing status snapshot
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            crisis_id: self
                .current_crisis
                .read()
                .expect("crisis id lock poisoned")
                .clone(),
            status: self.cycle_state().as_gateway_status().to_string(),
            started_at: *self.started_at.read().expect("started_at lock poisoned"),
            final_response: self.final_response(),
            last_update: *self.last_update.read().expect("last_update lock poisoned"),
            agent_progress: self.progress.progress(),
        }
    }

    /// Handle an inbound free-text prompt
    ///
    /// Trigger keywords start a cycle in the background; status keywords
    /// report the snapshot plus the last final response, if any.
    pub fn handle_prompt(&self, prompt: &str) -> PromptReply {
        match classify_intent(prompt) {
            Intent::Trigger => match self.trigger() {
                Ok(()) => PromptReply {
                    text: format!(
                        "Initiating crisis pipeline from {}",
                        self.config.feed_file
                    ),
                    final_response: None,
                },
                Err(OrchestratorError::CycleInFlight) => PromptReply {
                    text: "A crisis cycle is already in flight".to_string(),
                    final_response: None,
                },
                Err(e) => PromptReply {
                    text: format!("Failed to start crisis cycle: {}", e),
                    final_response: None,
                },
            },
            Intent::Status => {
                let snapshot = self.status();
                let text = format!(
                    "Crisis pipeline status: {} (crisis: {})",
                    snapshot.status,
                    snapshot.crisis_id.as_deref().unwrap_or("none"),
                );
                PromptReply {
                    text,
                    final_response: snapshot.final_response,
                }
            }
            Intent::General => PromptReply {
                text: "I coordinate the crisis response pipeline: sentiment analysis, \
                       fact checking, risk scoring, legal review, and press response. \
                       Ask me to 'start streaming' or check 'status'."
                    .to_string(),
                final_response: None,
            },
        }
    }

    /// Start a cycle in the background, reading posts from the feed file
    pub fn trigger(&self) -> Result<()> {
        if self.cycle_state().is_in_flight() {
            return Err(OrchestratorError::CycleInFlight);
        }

        let this = self.clone();
        tokio::spawn(async move {
            if let Err(e) = this.run_from_feed().await {
                tracing::error!("Crisis cycle failed: {}", e);
            }
        });

        Ok(())
    }

    /// Run one cycle, loading posts from the configured feed file
    pub async fn run_from_feed(&self) -> Result<()> {
        self.begin_cycle()?;
        let outcome = async {
            let posts = load_posts(&self.config.feed_file).await?;
            self.run_posts(&posts).await
        }
        .await;
        self.finish_cycle(&outcome);
        outcome
    }

    /// Run one cycle over the given posts
    pub async fn run_cycle(&self, posts: &[SocialPost]) -> Result<()> {
        self.begin_cycle()?;
        let outcome = self.run_posts(posts).await;
        self.finish_cycle(&outcome);
        outcome
    }

    /// Single-flight guard plus per-cycle reset
    fn begin_cycle(&self) -> Result<()> {
        {
            let mut state = self.state.lock().expect("cycle state lock poisoned");
            if state.is_in_flight() {
                return Err(OrchestratorError::CycleInFlight);
            }
            *state = CycleState::Dispatched;
        }

        tracing::info!("Starting crisis cycle");
        self.clear_final_response();
        *self
            .current_crisis
            .write()
            .expect("crisis id lock poisoned") = None;
        *self.started_at.write().expect("started_at lock poisoned") = Some(Utc::now());
        self.touch();
        self.progress
            .set_status(AgentRole::EarToGround, AgentStatus::Active);

        Ok(())
    }

    fn finish_cycle(&self, outcome: &Result<()>) {
        match outcome {
            Ok(()) => {
                self.progress
                    .set_status(AgentRole::EarToGround, AgentStatus::Complete);
                self.set_state(CycleState::Done);
            }
            Err(e) => {
                tracing::error!("Error in crisis cycle: {}", e);
                self.progress
                    .set_status(AgentRole::EarToGround, AgentStatus::Error);
                self.set_state(CycleState::Failed);
            }
        }
    }

    async fn run_posts(&self, posts: &[SocialPost]) -> Result<()> {
        if posts.is_empty() {
            tracing::info!("No posts available to process");
            return Ok(());
        }

        let limit = if self.config.post_limit == 0 {
            posts.len()
        } else {
            self.config.post_limit.min(posts.len())
        };
        tracing::info!(
            "Processing {} of {} posts for crisis analysis",
            limit,
            posts.len()
        );

        for (i, post) in posts[..limit].iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.config.post_rate).await;
            }

            let crisis = CrisisEvent::from_post(post);
            *self
                .current_crisis
                .write()
                .expect("crisis id lock poisoned") = Some(crisis.crisis_id.clone());

            if let Err(e) = self.process_post(&crisis).await {
                tracing::error!("Error processing post {}: {}", post.id, e);
            }
        }

        Ok(())
    }

    /// Run the full pipeline for one post
    ///
    /// Missing-data gates are soft: they log, leave downstream stages
    /// uncalled, and let the cycle complete with no final response stored.
    async fn process_post(&self, crisis: &CrisisEvent) -> Result<()> {
        tracing::info!(
            "Processing crisis {} from {}",
            crisis.crisis_id,
            crisis.author
        );

        // Fan-out: sentiment and fact-check in parallel under one budget
        self.set_state(CycleState::FannedOut);

        let this = self.clone();
        let ev = crisis.clone();
        let mut sentiment_task =
            tokio::spawn(async move { this.call_sentiment_analyst(&ev).await });

        let this = self.clone();
        let ev = crisis.clone();
        let mut fact_task = tokio::spawn(async move { this.call_fact_checker(&ev).await });

        let joined = tokio::time::timeout(self.config.fan_out_timeout, async {
            tokio::join!(&mut sentiment_task, &mut fact_task)
        })
        .await;

        let (sentiment_env, fact_env) = match joined {
            Ok((sentiment, fact)) => (
                Self::resolve_branch("sentiment_analyst", sentiment),
                Self::resolve_branch("fact_checker", fact),
            ),
            Err(_) => {
                // Shared budget blown: cancel both branches, abort the cycle remainder
                sentiment_task.abort();
                fact_task.abort();
                tracing::error!(
                    "Timeout waiting for sentiment and fact-check fan-out ({:?})",
                    self.config.fan_out_timeout
                );
                self.mark_cancelled_fan_out_roles();
                return Ok(());
            }
        };

        let (sentiment_env, fact_env) = match (sentiment_env, fact_env) {
            (Some(s), Some(f)) => (s, f),
            (s, f) => {
                tracing::error!(
                    "Cannot call risk score - missing analysis data. Sentiment: {}, Fact: {}",
                    s.is_some(),
                    f.is_some()
                );
                return Ok(());
            }
        };

        // Risk scoring (hard precondition: both analyses extractable)
        self.set_state(CycleState::RiskPending);
        let risk_env = match self
            .call_risk_score(crisis, &sentiment_env, &fact_env)
            .await
        {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!("Risk scoring failed for crisis {}: {}", crisis.crisis_id, e);
                return Ok(());
            }
        };

        // Legal review, fed the fact-check output
        self.set_state(CycleState::LegalPending);
        let legal_review = self.call_legal_counsel(crisis, &fact_env).await;

        // Synthesis gate: risk assessment and legal review both recoverable
        let risk_assessment = extract_analysis(&risk_env, "risk_assessment");
        if risk_assessment.is_empty() || legal_review.is_empty() {
            tracing::error!(
                "Cannot call press secretary - missing data. Risk: {}, Legal: {}",
                !risk_assessment.is_empty(),
                !legal_review.is_empty()
            );
            return Ok(());
        }

        // Synthesis
        self.set_state(CycleState::Synthesizing);
        if let Err(e) = self
            .call_press_secretary(crisis, &sentiment_env, &fact_env, &risk_env, &legal_review)
            .await
        {
            tracing::error!(
                "Press secretary call failed for crisis {}: {}",
                crisis.crisis_id,
                e
            );
        }

        Ok(())
    }

    /// Flatten a fan-out branch join result; failures were already logged
    /// and status-marked inside the call helper.
    fn resolve_branch(
        role: &str,
        joined: std::result::Result<crisis_comms::Result<Value>, JoinError>,
    ) -> Option<Value> {
        match joined {
            Ok(Ok(envelope)) => Some(envelope),
            Ok(Err(_)) => None,
            Err(e) => {
                tracing::error!("Fan-out branch {} panicked or was cancelled: {}", role, e);
                None
            }
        }
    }

    /// Roles still active after a fan-out abort resolve to error
    fn mark_cancelled_fan_out_roles(&self) {
        for role in [AgentRole::SentimentAnalyst, AgentRole::FactChecker] {
            if self.progress.status(role) == AgentStatus::Active {
                self.progress.set_status(role, AgentStatus::Error);
            }
        }
    }

    async fn call_sentiment_analyst(&self, crisis: &CrisisEvent) -> crisis_comms::Result<Value> {
        self.progress
            .set_status(AgentRole::SentimentAnalyst, AgentStatus::Active);

        let prompt = format!(
            "Please analyze the sentiment of this crisis content: {}",
            crisis.text
        );
        let request = AgentRequest::text(
            format!("crisis-{}-sentiment", crisis.crisis_id),
            prompt,
        );

        match self
            .caller
            .call(&self.endpoints.sentiment_analyst, request, self.config.call_timeout)
            .await
        {
            Ok(envelope) => {
                tracing::info!(
                    "Sentiment analyst completed for crisis {}",
                    crisis.crisis_id
                );
                let payload = extract_analysis(&envelope, "sentiment_analysis");
                if !payload.is_empty() {
                    self.progress
                        .set_result(AgentRole::SentimentAnalyst, AnalysisData::classify(payload));
                }
                self.progress
                    .set_status(AgentRole::SentimentAnalyst, AgentStatus::Complete);
                Ok(envelope)
            }
            Err(e) => {
                tracing::error!("Sentiment analyst call failed: {}", e);
                self.progress
                    .set_status(AgentRole::SentimentAnalyst, AgentStatus::Error);
                Err(e)
            }
        }
    }

    async fn call_fact_checker(&self, crisis: &CrisisEvent) -> crisis_comms::Result<Value> {
        self.progress
            .set_status(AgentRole::FactChecker, AgentStatus::Active);

        let prompt = format!(
            "Please verify the claims in this crisis content: {}",
            crisis.text
        );
        let request = AgentRequest::text(
            format!("crisis-{}-factcheck", crisis.crisis_id),
            prompt,
        );

        match self
            .caller
            .call(&self.endpoints.fact_checker, request, self.config.call_timeout)
            .await
        {
            Ok(envelope) => {
                tracing::info!("Fact checker completed for crisis {}", crisis.crisis_id);
                let payload = Self::extract_fact_analysis(&envelope);
                if !payload.is_empty() {
                    self.progress
                        .set_result(AgentRole::FactChecker, AnalysisData::classify(payload));
                }
                self.progress
                    .set_status(AgentRole::FactChecker, AgentStatus::Complete);
                Ok(envelope)
            }
            Err(e) => {
                tracing::error!("Fact checker call failed: {}", e);
                self.progress
                    .set_status(AgentRole::FactChecker, AgentStatus::Error);
                Err(e)
            }
        }
    }

    /// Fact-check payloads appear under either key depending on the agent
    fn extract_fact_analysis(envelope: &Value) -> Map<String, Value> {
        let payload = extract_analysis(envelope, "fact_check_analysis");
        if !payload.is_empty() {
            return payload;
        }
        extract_analysis(envelope, "fact_analysis")
    }

    async fn call_risk_score(
        &self,
        crisis: &CrisisEvent,
        sentiment_env: &Value,
        fact_env: &Value,
    ) -> Result<Value> {
        self.progress
            .set_status(AgentRole::RiskScore, AgentStatus::Active);

        let sentiment_analysis = extract_analysis(sentiment_env, "sentiment_analysis");
        let fact_analysis = Self::extract_fact_analysis(fact_env);

        if sentiment_analysis.is_empty() || fact_analysis.is_empty() {
            self.progress
                .set_status(AgentRole::RiskScore, AgentStatus::Error);
            return Err(OrchestratorError::missing_analysis(format!(
                "sentiment: {}, fact: {}",
                !sentiment_analysis.is_empty(),
                !fact_analysis.is_empty()
            )));
        }

        let combined = json!({
            "crisis_id": crisis.crisis_id,
            "fact_analysis": fact_analysis,
            "sentiment_analysis": sentiment_analysis,
            "timestamp": crisis.timestamp,
            "content": crisis.text,
        });

        let prompt = format!(
            "Please assess the risk for this crisis with combined analysis: {}",
            serde_json::to_string(&combined)?
        );
        let request = AgentRequest::text(
            format!("risk-assessment-{}", crisis.crisis_id),
            prompt,
        );

        match self
            .caller
            .call(&self.endpoints.risk_score, request, self.config.call_timeout)
            .await
        {
            Ok(envelope) => {
                tracing::info!("Risk score completed for crisis {}", crisis.crisis_id);
                let payload = extract_analysis(&envelope, "risk_assessment");
                if !payload.is_empty() {
                    self.progress
                        .set_result(AgentRole::RiskScore, AnalysisData::classify(payload));
                }
                self.progress
                    .set_status(AgentRole::RiskScore, AgentStatus::Complete);
                Ok(envelope)
            }
            Err(e) => {
                tracing::error!("Risk score call failed: {}", e);
                self.progress
                    .set_status(AgentRole::RiskScore, AgentStatus::Error);
                Err(e.into())
            }
        }
    }

    /// Legal review stage
    ///
    /// Scheduled directly by the orchestrator and fed the fact-check
    /// output. If the call fails or its envelope carries no `legal_review`,
    /// falls back to extracting it from the fact-check envelope (some
    /// fact-checker deployments embed the review there).
    async fn call_legal_counsel(
        &self,
        crisis: &CrisisEvent,
        fact_env: &Value,
    ) -> Map<String, Value> {
        self.progress
            .set_status(AgentRole::LegalCounsel, AgentStatus::Active);

        let fact_analysis = Self::extract_fact_analysis(fact_env);
        let payload = json!({
            "crisis_id": crisis.crisis_id,
            "fact_analysis": fact_analysis,
            "timestamp": crisis.timestamp,
            "content": crisis.text,
        });

        let prompt = format!(
            "Please review the legal implications of this crisis based on verified facts: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );
        let request = AgentRequest::text(
            format!("legal-review-{}", crisis.crisis_id),
            prompt,
        );

        let legal_review = match self
            .caller
            .call(&self.endpoints.legal_counsel, request, self.config.call_timeout)
            .await
        {
            Ok(envelope) => {
                let payload = extract_analysis(&envelope, "legal_review");
                if payload.is_empty() {
                    tracing::debug!(
                        "Legal review not found in legal counsel response, \
                         trying fact-check envelope"
                    );
                    extract_analysis(fact_env, "legal_review")
                } else {
                    payload
                }
            }
            Err(e) => {
                tracing::error!("Legal counsel call failed: {}", e);
                extract_analysis(fact_env, "legal_review")
            }
        };

        if legal_review.is_empty() {
            self.progress
                .set_status(AgentRole::LegalCounsel, AgentStatus::Error);
        } else {
            self.progress.set_result(
                AgentRole::LegalCounsel,
                AnalysisData::classify(legal_review.clone()),
            );
            self.progress
                .set_status(AgentRole::LegalCounsel, AgentStatus::Complete);
        }

        legal_review
    }

    async fn call_press_secretary(
        &self,
        crisis: &CrisisEvent,
        sentiment_env: &Value,
        fact_env: &Value,
        risk_env: &Value,
        legal_review: &Map<String, Value>,
    ) -> Result<Value> {
        self.progress
            .set_status(AgentRole::PressSecretary, AgentStatus::Active);

        let comprehensive = json!({
            "crisis_id": crisis.crisis_id,
            "crisis_data": crisis.payload(),
            "sentiment_analysis": extract_analysis(sentiment_env, "sentiment_analysis"),
            "fact_analysis": Self::extract_fact_analysis(fact_env),
            "risk_assessment": extract_analysis(risk_env, "risk_assessment"),
            "legal_review": legal_review,
            "timestamp": crisis.timestamp,
        });

        let prompt = format!(
            "Please generate the official crisis response based on comprehensive analysis.\n\n\
             CRISIS_DATA:\n{}\nEND_CRISIS_DATA",
            serde_json::to_string_pretty(&comprehensive)?
        );
        let request = AgentRequest::text(
            format!("press-response-{}", crisis.crisis_id),
            prompt,
        );

        match self
            .caller
            .call(&self.endpoints.press_secretary, request, self.config.call_timeout)
            .await
        {
            Ok(envelope) => {
                let payload = extract_analysis(&envelope, "press_response");
                if payload.is_empty() {
                    tracing::warn!(
                        "Could not extract press response for crisis {}",
                        crisis.crisis_id
                    );
                } else {
                    self.progress.set_result(
                        AgentRole::PressSecretary,
                        AnalysisData::classify(payload.clone()),
                    );
                    self.store_final_response(crisis, payload)?;
                }
                self.progress
                    .set_status(AgentRole::PressSecretary, AgentStatus::Complete);
                Ok(envelope)
            }
            Err(e) => {
                tracing::error!("Press secretary call failed: {}", e);
                self.progress
                    .set_status(AgentRole::PressSecretary, AgentStatus::Error);
                Err(e.into())
            }
        }
    }

    fn store_final_response(
        &self,
        crisis: &CrisisEvent,
        payload: Map<String, Value>,
    ) -> Result<()> {
        let response: FinalCrisisResponse = serde_json::from_value(Value::Object(payload))?;

        tracing::info!(
            "Final crisis response stored for crisis {}: tone={}, key_messages={}, \
             legal_compliance={}, confidence={:.2}",
            crisis.crisis_id,
            response.tone,
            response.key_messages.len(),
            response.legal_compliance,
            response.confidence
        );

        *self
            .final_response
            .write()
            .expect("final response lock poisoned") = Some(response);
        self.touch();

        Ok(())
    }

    fn set_state(&self, state: CycleState) {
        tracing::debug!("Cycle state: {:?}", state);
        *self.state.lock().expect("cycle state lock poisoned") = state;
        self.touch();
    }

    fn touch(&self) {
        *self.last_update.write().expect("last_update lock poisoned") = Some(Utc::now());
    }
}
