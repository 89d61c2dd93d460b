//! Password hashing port.

use parley_types::error::PasswordError;

/// One-way adaptive password hashing.
///
/// Hashing is CPU-bound and synchronous; implementations must not block
/// on IO. The stored hash is an opaque string (PHC format in practice)
/// that only `verify` knows how to interpret.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing hash string.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` for a well-formed hash that does not match;
    /// `Err` only when the stored hash itself cannot be interpreted.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
