//! Infrastructure implementations for Parley.
//!
//! Implements the port traits from parley-core: SQLite repositories over
//! a split reader/writer pool, Argon2id password hashing, HS256 session
//! tokens, the rule-based canned reply provider, and config loading.

pub mod config;
pub mod crypto;
pub mod reply;
pub mod sqlite;
