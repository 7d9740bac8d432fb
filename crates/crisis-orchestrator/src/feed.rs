//! Social-post feed loading and validation
//!
//! The feed is a flat JSON array of post records. Every record must carry
//! `id`, `author`, `text`, and `timestamp`; validation fails fast naming
//! the offending record index and field. An empty feed is a valid, empty
//! pipeline run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{OrchestratorError, Result};

/// Fields every post record must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "author", "text", "timestamp"];

/// One social-media post record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: String,
    pub author: String,
    pub text: String,
    pub timestamp: String,

    /// Source-specific fields (engagement counts, keywords, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Load and validate posts from a JSON file
pub async fn load_posts<P: AsRef<Path>>(path: P) -> Result<Vec<SocialPost>> {
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        OrchestratorError::feed(format!("Post feed not found: {}: {}", path.display(), e))
    })?;

    let posts = parse_posts(&content)?;
    tracing::info!("Loaded {} posts from {}", posts.len(), path.display());

    Ok(posts)
}

/// Parse and validate a JSON array of post records
pub fn parse_posts(content: &str) -> Result<Vec<SocialPost>> {
    let records: Vec<Value> = serde_json::from_str(content)?;

    validate_records(&records)?;

    let posts = records
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<SocialPost>, _>>()?;

    Ok(posts)
}

/// Check that every record carries the required fields
///
/// An empty record list is valid.
pub fn validate_records(records: &[Value]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        for field in REQUIRED_FIELDS {
            let present = record
                .get(field)
                .map(|v| !v.is_null())
                .unwrap_or(false);
            if !present {
                return Err(OrchestratorError::validation(index, field));
            }
        }
    }
    Ok(())
}
