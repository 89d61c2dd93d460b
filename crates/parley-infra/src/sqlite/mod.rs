//! SQLite persistence layer.

pub mod pool;
pub mod transcript;
pub mod user;

pub use pool::DatabasePool;
pub use transcript::SqliteTranscriptRepository;
pub use user::SqliteUserRepository;
