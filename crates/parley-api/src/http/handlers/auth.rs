//! Registration and login HTTP handlers.
//!
//! Endpoints:
//! - POST /api/auth/register - Create an account, returns 201 `{user, token}`
//! - POST /api/auth/login    - Authenticate, returns 200 `{user, token}`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use parley_types::user::AuthSession;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body shared by register and login.
///
/// Fields default to empty strings so a missing field reaches the service
/// as empty input and produces the 400 validation error rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/register - Create an account and issue a session token.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthSession>), AppError> {
    let session = state.auth_service.register(&req.email, &req.password).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/auth/login - Authenticate and issue a fresh session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthSession>, AppError> {
    let session = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(session))
}
