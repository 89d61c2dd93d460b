//! Server configuration types.
//!
//! `ServerConfig` represents the optional `config.toml` in the data
//! directory. All fields have sensible defaults; CLI flags override
//! whatever the file provides.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Parley server.
///
/// Loaded from `{data_dir}/config.toml` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP listener binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Session token lifetime in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_token_ttl_days() -> i64 {
    7
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            token_ttl_days: default_token_ttl_days(),
        }
    }
}
