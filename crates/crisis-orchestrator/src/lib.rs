//! Crisis orchestration core
//!
//! Drives the analysis pipeline for one social-media post: fan out to
//! sentiment and fact-check in parallel, bridge to risk scoring, schedule
//! the legal review, and converge everything into the press-secretary
//! synthesis. Tracks per-role progress and holds the last final response
//! for the gateway to poll.

pub mod analysis;
pub mod error;
pub mod event;
pub mod feed;
pub mod intent;
pub mod pipeline;
pub mod progress;
pub mod response;
pub mod roles;

// Re-exports
pub use analysis::AnalysisData;
pub use error::{OrchestratorError, Result};
pub use event::CrisisEvent;
pub use feed::{load_posts, SocialPost};
pub use intent::{classify_intent, Intent};
pub use pipeline::{
    AgentEndpoints, CrisisOrchestrator, CycleState, PipelineConfig, PromptReply, StatusSnapshot,
};
pub use progress::ProgressStore;
pub use response::{ChannelResponses, FinalCrisisResponse, ToneAlternative};
pub use roles::{AgentRole, AgentStatus};
