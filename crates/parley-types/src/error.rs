use thiserror::Error;

/// Errors from repository operations (used by trait definitions in parley-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors from password hashing and verification.
///
/// IMPORTANT: These errors never include password material or hash output
/// in their Display/Debug output to prevent accidental logging of secrets.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed")]
    Hash,

    #[error("stored password hash is malformed")]
    InvalidHash,
}

/// Errors from session token issuance and verification.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("token invalid")]
    Invalid,

    #[error("token signing failed")]
    Signing,
}

/// Errors from the reply provider.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("reply provider unavailable: {0}")]
    Unavailable(String),
}

/// Errors from registration and login.
///
/// `InvalidCredentials` covers both an unknown email and a failed password
/// check: the two paths must stay indistinguishable to the caller.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("email and password are required")]
    MissingFields,

    #[error("email already in use")]
    EmailTaken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Hashing(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Errors from transcript operations.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("message content is required")]
    EmptyContent,

    #[error(transparent)]
    Reply(#[from] ReplyError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
