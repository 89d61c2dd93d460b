//! User repository trait definition.
//!
//! Defines the storage interface for user accounts. The infrastructure
//! layer (parley-infra) implements this trait with SQLite persistence.
//!
//! Uses native async fn in traits (Rust 2024 edition, no async_trait macro).

use parley_types::error::RepositoryError;
use parley_types::user::UserRecord;
use uuid::Uuid;

/// Repository trait for user account persistence.
///
/// Users are append-only: created exactly once by registration, never
/// updated or deleted.
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Returns `Conflict` if the email is already taken.
    fn create(
        &self,
        user: &UserRecord,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Look up a user by email (case-sensitive, as stored).
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserRecord>, RepositoryError>> + Send;

    /// Look up a user by id.
    fn find_by_id(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<UserRecord>, RepositoryError>> + Send;
}
