//! Request/Response models

use serde::{Deserialize, Serialize};

/// Demo crisis text used when a trigger carries no content of its own
pub const DEFAULT_CRISIS_TEXT: &str = "BREAKING: Major allegations surface against company \
                                       executive. Investigation needed immediately. #CrisisAlert";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TriggerRequest {
    /// Crisis content to analyze; a demo headline when omitted
    pub content: Option<String>,
}

impl TriggerRequest {
    pub fn content_or_default(&self) -> &str {
        self.content.as_deref().unwrap_or(DEFAULT_CRISIS_TEXT)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub status: String,
    pub crisis_id: String,
    pub message: String,
}
