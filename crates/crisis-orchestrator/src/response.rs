//! Final crisis response types

use serde::{Deserialize, Serialize};

/// An alternative statement with a different tone
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToneAlternative {
    #[serde(default)]
    pub tone: String,

    #[serde(default)]
    pub statement: String,
}

/// Channel-specific renditions of the response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelResponses {
    #[serde(default)]
    pub press_release: String,

    #[serde(default)]
    pub social_media: String,

    #[serde(default)]
    pub employee_memo: String,
}

/// The press-secretary synthesis: the vetted, multi-channel crisis response
///
/// Held as the single "last known final response"; overwritten by each new
/// pipeline run and cleared when a new crisis cycle begins. Every field
/// defaults so a partially-populated synthesis still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalCrisisResponse {
    #[serde(default)]
    pub primary_statement: String,

    #[serde(default)]
    pub tone: String,

    #[serde(default)]
    pub key_messages: Vec<String>,

    #[serde(default)]
    pub alternatives: Vec<ToneAlternative>,

    #[serde(default)]
    pub channels: ChannelResponses,

    #[serde(default)]
    pub legal_compliance: bool,

    #[serde(default)]
    pub confidence: f64,

    #[serde(default)]
    pub reputational_risk: String,
}
