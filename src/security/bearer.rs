use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::security::tokens::Claims;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::sync::Arc;
use tracing::debug;

/// Claims of a verified, unexpired access token.
///
/// Handlers that take this extractor are only reached with an
/// `Authorization: Bearer <jwt>` header carrying a valid access token.
#[derive(Debug, Clone)]
pub struct AccessClaims(pub Claims);

impl FromRequestParts<Arc<AppState>> for AccessClaims {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = state.tokens.verify_access(token).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            AuthError::from(e)
        })?;

        Ok(Self(claims))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::BadHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::BadHeader),
    }
}
