//! Bearer-token authentication extractor (the auth gate).
//!
//! Extracts and verifies the session token from the
//! `Authorization: Bearer <token>` header. A valid token resolves to the
//! subject user id; the extractor does NOT re-check that the user row
//! still exists. Pure gate: no side effects beyond extraction.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::http::error::AppError;
use crate::state::AppState;

use parley_core::auth::TokenIssuer;

/// Authenticated request identity. Extracting this validates the token.
pub struct CurrentUser(pub Uuid);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts)?;

        let user_id = state
            .token_issuer
            .verify(token)
            .map_err(|_| AppError::Unauthenticated("invalid or expired token"))?;

        Ok(CurrentUser(user_id))
    }
}

/// Pull the token out of the `Authorization: Bearer <token>` header.
fn extract_bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::Unauthenticated("missing auth token"))?;

    let header_str = header_value
        .to_str()
        .map_err(|_| AppError::Unauthenticated("missing auth token"))?;

    let token = header_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthenticated("missing auth token"))?;

    Ok(token)
}
