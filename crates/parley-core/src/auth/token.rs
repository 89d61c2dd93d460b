//! Session token port.

use parley_types::error::TokenError;
use uuid::Uuid;

/// Signs and verifies compact, expiring bearer tokens.
///
/// Tokens are self-contained: they carry the subject user id and an
/// absolute expiry, and are never stored server-side. Possession of a
/// correctly signed, unexpired token is the sole authorization proof.
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for the given subject, expiring `ttl_days` from now.
    fn issue(&self, subject: &Uuid, ttl_days: i64) -> Result<String, TokenError>;

    /// Verify signature and expiry, returning the subject user id.
    fn verify(&self, token: &str) -> Result<Uuid, TokenError>;
}
