//! Rule-based canned reply provider.
//!
//! Implements `ReplyProvider` from `parley-core` with string dispatch on
//! the trimmed user content. Rules are checked in priority order; the
//! last rule always matches, so a reply is never empty. A model-backed
//! provider would replace this behind the same trait.

use parley_core::reply::ReplyProvider;
use parley_types::error::ReplyError;

/// Deterministic rule-based reply provider.
pub struct CannedReplyProvider;

impl CannedReplyProvider {
    /// Create a new provider.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CannedReplyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyProvider for CannedReplyProvider {
    async fn reply(&self, content: &str) -> Result<String, ReplyError> {
        let lower = content.to_lowercase();

        if lower.contains("hello") {
            return Ok("Hi! How can I help you today?".to_string());
        }

        if content.ends_with('?') {
            return Ok(format!(
                "That's a great question: \"{content}\". If this were a real model, I'd give you a detailed answer. For now, I'm just a rule-based bot."
            ));
        }

        if lower.contains("help") {
            return Ok(
                "Sure! You can ask me questions, or just send random text. I'm currently a rule-based bot."
                    .to_string(),
            );
        }

        Ok(format!(
            "You said: \"{content}\". I'm just echoing back for now, but this pipeline is ready for a real AI later."
        ))
    }
}
