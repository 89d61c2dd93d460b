//! Reply provider implementations.

pub mod canned;

pub use canned::CannedReplyProvider;
