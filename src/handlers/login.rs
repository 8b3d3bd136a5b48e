use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::auth::{LoginRequest, LoginResponse};
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::error;

/// Check credentials and issue tokens
///
/// POST /login
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = state
        .credentials
        .login(request)
        .await
        .inspect_err(|e| error!(error = %e, "Login failed"))?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::core::routes::build_router;
    use crate::core::state::test_support::create_test_state;
    use crate::models::auth::LoginResponse;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn registered_app() -> Router {
        let app = build_router(create_test_state());

        let response = app
            .clone()
            .oneshot(post_json(
                "/register",
                json!({
                    "user_name": "alice",
                    "role": "admin",
                    "email": "alice@example.com",
                    "password": "secret"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        app
    }

    async fn login(app: Router, email: &str, password: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(post_json("/login", json!({ "email": email, "password": password })))
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_login_success() {
        let app = registered_app().await;

        let (status, body) = login(app, "alice@example.com", "secret").await;

        assert_eq!(status, StatusCode::OK);
        let body: LoginResponse = serde_json::from_value(body).unwrap();
        assert!(body.status);
        assert_eq!(body.message, "User logged in Successfully");
        assert!(body.access_token.is_some());
        assert!(body.refresh_token.is_some());
    }

    #[tokio::test]
    async fn test_login_incorrect_password_keeps_tokens() {
        let app = registered_app().await;

        let (status, body) = login(app, "alice@example.com", "nope").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], true);
        assert_eq!(body["message"], "Incorrect Password");
        assert!(body["access_token"].is_string());
        assert!(body["refresh_token"].is_string());
    }

    #[tokio::test]
    async fn test_login_empty_password_is_incorrect() {
        let app = registered_app().await;

        let (status, body) = login(app, "alice@example.com", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], true);
        assert_eq!(body["message"], "Incorrect Password");
        assert!(body["access_token"].is_string());
    }

    #[tokio::test]
    async fn test_login_unknown_user_has_null_tokens() {
        let app = registered_app().await;

        let (status, body) = login(app, "bob@example.com", "secret").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": true,
                "message": "User not found please register",
                "access_token": null,
                "refresh_token": null
            })
        );
    }
}
