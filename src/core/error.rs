// Centralized error handling for the credential service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Malformed register/login input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} is too long: at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Not a valid email address: {0}")]
    InvalidEmail(String),
}

/// Errors raised by a user store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(String),
}

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encode(jsonwebtoken::errors::Error),

    #[error("Token has expired")]
    Expired,

    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("Only non-refresh tokens are allowed")]
    WrongType,

    #[error("{0}")]
    Malformed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

/// Errors surfaced by the register/login endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Body returned when a register/login request cannot be handled
#[derive(Debug, Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub status: bool,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Internals are logged by the caller, not leaked to clients
            ApiError::Store(_) | ApiError::Password(_) | ApiError::Token(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                status: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Rejections produced by the bearer token gate
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing Authorization Header")]
    MissingHeader,

    #[error("Bad Authorization header. Expected 'Authorization: Bearer <JWT>'")]
    BadHeader,

    #[error(transparent)]
    Token(#[from] TokenError),
}

#[derive(Debug, Serialize, serde::Deserialize)]
pub struct MsgResponse {
    pub msg: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::MissingHeader => StatusCode::UNAUTHORIZED,
            AuthError::Token(TokenError::Expired) => StatusCode::UNAUTHORIZED,
            AuthError::Token(TokenError::Encode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::BadHeader | AuthError::Token(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, Json(MsgResponse { msg: self.to_string() })).into_response()
    }
}
