//! Shared domain types for Parley.
//!
//! This crate contains the types used across the service: users, transcript
//! messages, server configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod user;
