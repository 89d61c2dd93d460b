//! Cryptographic implementations: password hashing, session tokens, and
//! the signing-secret loader.

pub mod password;
pub mod secret;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use token::JwtTokenIssuer;
