//! SQLite transcript repository implementation.
//!
//! Implements `TranscriptRepository` from `parley-core`. The pair insert
//! runs inside a single transaction on the writer pool: the user row, then
//! the assistant row, then commit. Any failure rolls back both, so no
//! partial pair is ever observable to readers.

use chrono::{DateTime, Utc};
use parley_core::repository::transcript::TranscriptRepository;
use parley_types::chat::{Message, MessageRole};
use parley_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TranscriptRepository`.
pub struct SqliteTranscriptRepository {
    pool: DatabasePool,
}

impl SqliteTranscriptRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Message.
struct MessageRow {
    id: i64,
    user_id: String,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| RepositoryError::Query(format!("invalid user_id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Message {
            id: self.id,
            user_id,
            role,
            content: self.content,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

impl TranscriptRepository for SqliteTranscriptRepository {
    async fn append_turn(
        &self,
        user_id: &Uuid,
        user_content: &str,
        assistant_content: &str,
    ) -> Result<(Message, Message), RepositoryError> {
        let now = Utc::now();
        let now_text = now.to_rfc3339();

        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let user_result = sqlx::query(
            "INSERT INTO messages (user_id, role, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id.to_string())
        .bind(MessageRole::User.to_string())
        .bind(user_content)
        .bind(&now_text)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let assistant_result = sqlx::query(
            "INSERT INTO messages (user_id, role, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id.to_string())
        .bind(MessageRole::Assistant.to_string())
        .bind(assistant_content)
        .bind(&now_text)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let user_msg = Message {
            id: user_result.last_insert_rowid(),
            user_id: *user_id,
            role: MessageRole::User,
            content: user_content.to_string(),
            created_at: now,
        };
        let assistant_msg = Message {
            id: assistant_result.last_insert_rowid(),
            user_id: *user_id,
            role: MessageRole::Assistant,
            content: assistant_content.to_string(),
            created_at: now,
        };

        Ok((user_msg, assistant_msg))
    }

    async fn list_messages(&self, user_id: &Uuid) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE user_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn clear_messages(&self, user_id: &Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
