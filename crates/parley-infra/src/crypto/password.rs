//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` trait from `parley-core` using the
//! `argon2` crate (RustCrypto ecosystem) with its default parameters
//! (Argon2id, 19 MiB memory, 2 iterations) and a random per-password salt.
//! Hashes are stored as PHC-format strings, so the parameters travel with
//! the hash and can be raised later without invalidating old records.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use parley_core::auth::hasher::PasswordHasher;
use parley_types::error::PasswordError;

/// Argon2id implementation of `PasswordHasher`.
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| PasswordError::Hash)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
