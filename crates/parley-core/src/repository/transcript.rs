//! Transcript repository trait definition.
//!
//! Defines the storage interface for transcript messages: transactional
//! pair insert, ordered read, and bulk delete. The infrastructure layer
//! (parley-infra) implements this trait with SQLite persistence.
//!
//! Uses native async fn in traits (Rust 2024 edition, no async_trait macro).

use parley_types::chat::Message;
use parley_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for transcript message persistence.
pub trait TranscriptRepository: Send + Sync {
    /// Insert a user/assistant message pair in a single transaction.
    ///
    /// Either both rows are persisted or neither is; no partial pair is
    /// ever observable. Returns the persisted rows (with server-assigned
    /// ids and timestamps) in `[user, assistant]` order.
    fn append_turn(
        &self,
        user_id: &Uuid,
        user_content: &str,
        assistant_content: &str,
    ) -> impl std::future::Future<Output = Result<(Message, Message), RepositoryError>> + Send;

    /// All messages owned by a user, ordered by `created_at` then `id`
    /// ascending. Empty vec if the user has no messages.
    fn list_messages(
        &self,
        user_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Delete all messages owned by a user. Returns the number of rows
    /// deleted; deleting an empty transcript is a zero-row success.
    fn clear_messages(
        &self,
        user_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
