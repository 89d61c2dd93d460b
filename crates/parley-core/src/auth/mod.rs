//! Credential management: hashing and token ports plus the auth service.

pub mod hasher;
pub mod service;
pub mod token;

pub use hasher::PasswordHasher;
pub use service::AuthService;
pub use token::TokenIssuer;
