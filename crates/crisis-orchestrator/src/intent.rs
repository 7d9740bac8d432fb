//! Inbound prompt intent classification
//!
//! The orchestrator's public surface accepts free-text prompts; keywords
//! decide whether the prompt starts a cycle, asks for status, or is a
//! general question about the system.

/// What an inbound prompt is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start a crisis cycle
    Trigger,

    /// Report current status plus the last final response, if any
    Status,

    /// Anything else
    General,
}

/// Classify a prompt by keyword
pub fn classify_intent(prompt: &str) -> Intent {
    let lower = prompt.to_lowercase();

    if lower.contains("stream") || lower.contains("start") || lower.contains("tweets") {
        Intent::Trigger
    } else if lower.contains("status") || lower.contains("monitor") {
        Intent::Status
    } else {
        Intent::General
    }
}
