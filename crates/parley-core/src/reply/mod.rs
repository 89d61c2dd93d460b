//! Reply provider port.
//!
//! Whatever produces assistant text is opaque to the transcript engine:
//! the shipped implementation is rule-based (parley-infra), but a
//! model-backed provider would implement the same trait.

use parley_types::error::ReplyError;

/// Supplies assistant text for a trimmed user message.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait ReplyProvider: Send + Sync {
    /// Produce a reply for the given (already trimmed) user content.
    fn reply(
        &self,
        content: &str,
    ) -> impl std::future::Future<Output = Result<String, ReplyError>> + Send;
}

/// Deterministic fallback used when a provider yields nothing usable.
pub fn fallback_reply(content: &str) -> String {
    format!("You said: \"{content}\". I'm just echoing back for now, but this pipeline is ready for a real AI later.")
}
