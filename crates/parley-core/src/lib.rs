//! Business logic for Parley.
//!
//! This crate defines the port traits (repositories, password hasher, token
//! issuer, reply provider) and the services composed from them: `AuthService`
//! for registration/login and `TranscriptEngine` for conversation turns.
//!
//! Never depends on parley-infra or any IO crate -- the infrastructure layer
//! implements the traits defined here.

pub mod auth;
pub mod reply;
pub mod repository;
pub mod transcript;
