//! Crisis events

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::feed::SocialPost;

/// One unit of pipeline work, created from a social-media post
///
/// Immutable once created; lives for the duration of a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisEvent {
    pub crisis_id: String,
    pub text: String,
    pub author: String,
    pub timestamp: String,
    pub source: String,
    pub platform: String,
}

impl CrisisEvent {
    /// Build an event from a post record
    pub fn from_post(post: &SocialPost) -> Self {
        Self {
            crisis_id: post.id.clone(),
            text: post.text.clone(),
            author: post.author.clone(),
            timestamp: post.timestamp.clone(),
            source: "social_media".to_string(),
            platform: "twitter".to_string(),
        }
    }

    /// The crisis data mapping embedded in downstream payloads
    ///
    /// Carries the post text under both `text` and `content`; some agents
    /// read one, some the other.
    pub fn payload(&self) -> Value {
        json!({
            "crisis_id": self.crisis_id,
            "text": self.text,
            "content": self.text,
            "author": self.author,
            "timestamp": self.timestamp,
            "source": self.source,
            "platform": self.platform,
        })
    }
}
