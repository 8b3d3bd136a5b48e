use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::auth::{RegisterRequest, RegisterResponse};
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::error;

/// Create a user account
///
/// POST /register
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let response = state
        .credentials
        .register(request)
        .await
        .inspect_err(|e| error!(error = %e, "Registration failed"))?;

    Ok(Json(response))
}
