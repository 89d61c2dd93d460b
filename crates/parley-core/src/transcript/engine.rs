//! Transcript engine: append conversation turns atomically, serve history.
//!
//! A turn is one user message plus its paired assistant reply. The engine
//! obtains the reply BEFORE the repository opens its write transaction,
//! then hands both texts to a single transactional pair-insert. Observable
//! semantics: no partial pair is ever visible, and a provider failure
//! persists nothing -- without holding the writer lock across provider
//! latency.

use parley_types::chat::Message;
use parley_types::error::TranscriptError;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::reply::{fallback_reply, ReplyProvider};
use crate::repository::transcript::TranscriptRepository;

/// Orchestrates transcript turns: validate, generate reply, persist pair.
pub struct TranscriptEngine<T: TranscriptRepository, R: ReplyProvider> {
    transcripts: T,
    replies: R,
}

impl<T: TranscriptRepository, R: ReplyProvider> TranscriptEngine<T, R> {
    /// Create a new engine with the given store and reply provider.
    pub fn new(transcripts: T, replies: R) -> Self {
        Self {
            transcripts,
            replies,
        }
    }

    /// Append one turn: the trimmed user message and its assistant reply,
    /// persisted all-or-nothing.
    ///
    /// Returns the persisted rows in `[user, assistant]` order.
    pub async fn append_turn(
        &self,
        user_id: &Uuid,
        raw_content: &str,
    ) -> Result<(Message, Message), TranscriptError> {
        let content = raw_content.trim();
        if content.is_empty() {
            return Err(TranscriptError::EmptyContent);
        }

        let reply = self.replies.reply(content).await?;
        let reply = if reply.trim().is_empty() {
            warn!(user_id = %user_id, "reply provider returned empty text, using fallback");
            fallback_reply(content)
        } else {
            reply
        };

        let pair = self.transcripts.append_turn(user_id, content, &reply).await?;
        debug!(user_id = %user_id, user_row = pair.0.id, assistant_row = pair.1.id, "turn appended");
        Ok(pair)
    }

    /// All messages owned by the user, oldest first. Read-only.
    pub async fn history(&self, user_id: &Uuid) -> Result<Vec<Message>, TranscriptError> {
        Ok(self.transcripts.list_messages(user_id).await?)
    }

    /// Delete the user's entire transcript. Idempotent: clearing an
    /// already-empty history is a zero-row success.
    pub async fn clear_history(&self, user_id: &Uuid) -> Result<u64, TranscriptError> {
        let deleted = self.transcripts.clear_messages(user_id).await?;
        debug!(user_id = %user_id, deleted, "history cleared");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use parley_types::chat::MessageRole;
    use parley_types::error::{ReplyError, RepositoryError};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    /// In-memory transcript store with a monotonically increasing rowid.
    #[derive(Default)]
    struct MemoryTranscriptRepository {
        rows: Mutex<Vec<Message>>,
        next_id: AtomicI64,
    }

    impl MemoryTranscriptRepository {
        fn make_row(&self, user_id: &Uuid, role: MessageRole, content: &str) -> Message {
            Message {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                user_id: *user_id,
                role,
                content: content.to_string(),
                created_at: Utc::now(),
            }
        }
    }

    impl TranscriptRepository for MemoryTranscriptRepository {
        async fn append_turn(
            &self,
            user_id: &Uuid,
            user_content: &str,
            assistant_content: &str,
        ) -> Result<(Message, Message), RepositoryError> {
            let user_row = self.make_row(user_id, MessageRole::User, user_content);
            let assistant_row = self.make_row(user_id, MessageRole::Assistant, assistant_content);
            let mut rows = self.rows.lock().unwrap();
            rows.push(user_row.clone());
            rows.push(assistant_row.clone());
            Ok((user_row, assistant_row))
        }

        async fn list_messages(&self, user_id: &Uuid) -> Result<Vec<Message>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|m| &m.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn clear_messages(&self, user_id: &Uuid) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|m| &m.user_id != user_id);
            Ok((before - rows.len()) as u64)
        }
    }

    struct FixedReplyProvider(&'static str);

    impl ReplyProvider for FixedReplyProvider {
        async fn reply(&self, _content: &str) -> Result<String, ReplyError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingReplyProvider;

    impl ReplyProvider for FailingReplyProvider {
        async fn reply(&self, _content: &str) -> Result<String, ReplyError> {
            Err(ReplyError::Unavailable("model offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_append_turn_returns_pair_in_order() {
        let engine = TranscriptEngine::new(
            MemoryTranscriptRepository::default(),
            FixedReplyProvider("sure thing"),
        );
        let user_id = Uuid::now_v7();

        let (user_msg, assistant_msg) = engine.append_turn(&user_id, "hello there").await.unwrap();
        assert_eq!(user_msg.role, MessageRole::User);
        assert_eq!(user_msg.content, "hello there");
        assert_eq!(assistant_msg.role, MessageRole::Assistant);
        assert_eq!(assistant_msg.content, "sure thing");
        assert!(assistant_msg.id > user_msg.id);
    }

    #[tokio::test]
    async fn test_append_turn_trims_content() {
        let engine = TranscriptEngine::new(
            MemoryTranscriptRepository::default(),
            FixedReplyProvider("ok"),
        );
        let user_id = Uuid::now_v7();

        let (user_msg, _) = engine.append_turn(&user_id, "  spaced out \n").await.unwrap();
        assert_eq!(user_msg.content, "spaced out");
    }

    #[tokio::test]
    async fn test_append_turn_rejects_whitespace_only() {
        let engine = TranscriptEngine::new(
            MemoryTranscriptRepository::default(),
            FixedReplyProvider("ok"),
        );
        let user_id = Uuid::now_v7();

        let err = engine.append_turn(&user_id, "   \t\n").await.unwrap_err();
        assert!(matches!(err, TranscriptError::EmptyContent));
        assert!(engine.history(&user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_turn_substitutes_fallback_for_empty_reply() {
        let engine = TranscriptEngine::new(
            MemoryTranscriptRepository::default(),
            FixedReplyProvider("   "),
        );
        let user_id = Uuid::now_v7();

        let (_, assistant_msg) = engine.append_turn(&user_id, "anyone home?").await.unwrap();
        assert_eq!(assistant_msg.content, fallback_reply("anyone home?"));
    }

    #[tokio::test]
    async fn test_failed_provider_persists_nothing() {
        let engine =
            TranscriptEngine::new(MemoryTranscriptRepository::default(), FailingReplyProvider);
        let user_id = Uuid::now_v7();

        let err = engine.append_turn(&user_id, "hi").await.unwrap_err();
        assert!(matches!(err, TranscriptError::Reply(_)));
        assert!(engine.history(&user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_in_call_order() {
        let engine = TranscriptEngine::new(
            MemoryTranscriptRepository::default(),
            FixedReplyProvider("ack"),
        );
        let user_id = Uuid::now_v7();

        for i in 0..3 {
            engine
                .append_turn(&user_id, &format!("message {i}"))
                .await
                .unwrap();
        }

        let history = engine.history(&user_id).await.unwrap();
        assert_eq!(history.len(), 6);
        assert_eq!(history[0].content, "message 0");
        assert_eq!(history[4].content, "message 2");
        for pair in history.chunks(2) {
            assert_eq!(pair[0].role, MessageRole::User);
            assert_eq!(pair[1].role, MessageRole::Assistant);
        }
    }

    #[tokio::test]
    async fn test_clear_history_is_idempotent() {
        let engine = TranscriptEngine::new(
            MemoryTranscriptRepository::default(),
            FixedReplyProvider("ack"),
        );
        let user_id = Uuid::now_v7();

        engine.append_turn(&user_id, "hi").await.unwrap();
        assert_eq!(engine.clear_history(&user_id).await.unwrap(), 2);
        assert_eq!(engine.clear_history(&user_id).await.unwrap(), 0);
        assert!(engine.history(&user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_histories_are_isolated_by_user() {
        let engine = TranscriptEngine::new(
            MemoryTranscriptRepository::default(),
            FixedReplyProvider("ack"),
        );
        let alice = Uuid::now_v7();
        let bob = Uuid::now_v7();

        engine.append_turn(&alice, "from alice").await.unwrap();
        engine.append_turn(&bob, "from bob").await.unwrap();

        let alice_history = engine.history(&alice).await.unwrap();
        assert_eq!(alice_history.len(), 2);
        assert!(alice_history.iter().all(|m| m.user_id == alice));
    }
}
