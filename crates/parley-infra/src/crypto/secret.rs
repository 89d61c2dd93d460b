//! Token signing-secret loading.
//!
//! Resolution order:
//! 1. `PARLEY_TOKEN_SECRET` environment variable (used as raw bytes).
//! 2. `{data_dir}/token.key`, a hex-encoded 32-byte key.
//! 3. Auto-generated with the OS CSPRNG on first boot and written to the
//!    key file, so tokens survive server restarts.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides the key file.
pub const SECRET_ENV: &str = "PARLEY_TOKEN_SECRET";

const KEY_FILE: &str = "token.key";

/// Errors from loading or generating the signing secret.
#[derive(Debug, Error)]
pub enum SigningKeyError {
    #[error("key file io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("key file is not valid hex")]
    InvalidKeyFile,
}

/// Load the signing secret for session tokens.
pub async fn load_signing_secret(data_dir: &Path) -> Result<Vec<u8>, SigningKeyError> {
    if let Ok(secret) = std::env::var(SECRET_ENV) {
        if !secret.is_empty() {
            tracing::debug!("using token signing secret from {SECRET_ENV}");
            return Ok(secret.into_bytes());
        }
    }

    let path = data_dir.join(KEY_FILE);
    match tokio::fs::read_to_string(&path).await {
        Ok(hex) => hex_decode(hex.trim()).ok_or(SigningKeyError::InvalidKeyFile),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let mut key = [0u8; 32];
            OsRng.fill_bytes(&mut key);
            let hex: String = key.iter().map(|b| format!("{b:02x}")).collect();
            tokio::fs::write(&path, &hex).await?;
            tracing::info!(path = %path.display(), "generated new token signing key");
            Ok(key.to_vec())
        }
        Err(err) => Err(err.into()),
    }
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.is_empty() || s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
