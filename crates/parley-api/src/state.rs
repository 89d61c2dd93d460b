//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository/hasher/issuer traits, but AppState
//! pins them to the concrete infra implementations. Built once at startup
//! and read-only thereafter; each request handler gets a cheap clone.

use std::path::PathBuf;
use std::sync::Arc;

use parley_core::auth::AuthService;
use parley_core::transcript::TranscriptEngine;
use parley_infra::crypto::secret::load_signing_secret;
use parley_infra::crypto::{Argon2PasswordHasher, JwtTokenIssuer};
use parley_infra::reply::CannedReplyProvider;
use parley_infra::sqlite::{DatabasePool, SqliteTranscriptRepository, SqliteUserRepository};
use parley_types::config::ServerConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAuthService =
    AuthService<SqliteUserRepository, Argon2PasswordHasher, JwtTokenIssuer>;

pub type ConcreteTranscriptEngine =
    TranscriptEngine<SqliteTranscriptRepository, CannedReplyProvider>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub transcript_engine: Arc<ConcreteTranscriptEngine>,
    /// Shared with the auth gate extractor for bearer-token verification.
    pub token_issuer: Arc<JwtTokenIssuer>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to DB, load the signing
    /// secret, wire services.
    pub async fn init(data_dir: PathBuf, config: &ServerConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!("sqlite://{}?mode=rwc", data_dir.join("parley.db").display());
        let db_pool = DatabasePool::new(&db_url).await?;

        let secret = load_signing_secret(&data_dir).await?;
        let token_issuer = JwtTokenIssuer::new(&secret);

        let auth_service = AuthService::new(
            SqliteUserRepository::new(db_pool.clone()),
            Argon2PasswordHasher::new(),
            token_issuer.clone(),
            config.token_ttl_days,
        );

        let transcript_engine = TranscriptEngine::new(
            SqliteTranscriptRepository::new(db_pool.clone()),
            CannedReplyProvider::new(),
        );

        Ok(Self {
            auth_service: Arc::new(auth_service),
            transcript_engine: Arc::new(transcript_engine),
            token_issuer: Arc::new(token_issuer),
            data_dir,
            db_pool,
        })
    }
}
