use crate::models::auth::{ProtectedResponse, PROTECTED_MESSAGE};
use crate::security::bearer::AccessClaims;
use axum::Json;
use tracing::debug;

/// GET /protected
pub async fn protected_handler(AccessClaims(claims): AccessClaims) -> Json<ProtectedResponse> {
    debug!(user_name = ?claims.sub.user_name(), "Protected route accessed");

    Json(ProtectedResponse {
        message: PROTECTED_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::core::error::MsgResponse;
    use crate::core::routes::build_router;
    use crate::core::state::test_support::{create_test_state, TEST_SECRET};
    use crate::models::auth::ProtectedResponse;
    use crate::security::tokens::{Identity, TokenIssuer, TokenKind};
    use crate::utils::time::current_timestamp;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn identity() -> Identity {
        Identity(Some("alice".to_string()), Some("admin".to_string()))
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn call(authorization: Option<&str>) -> Response {
        build_router(create_test_state())
            .oneshot(request(authorization))
            .await
            .unwrap()
    }

    async fn error_msg(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: MsgResponse = serde_json::from_slice(&bytes).unwrap();
        body.msg
    }

    #[tokio::test]
    async fn test_valid_access_token() {
        let state = create_test_state();
        let token = state.tokens.issue(&identity(), TokenKind::Access).unwrap();

        let response = build_router(state)
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ProtectedResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "This route is protected");
    }

    #[tokio::test]
    async fn test_missing_token() {
        let response = call(None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_msg(response).await, "Missing Authorization Header");
    }

    #[tokio::test]
    async fn test_malformed_header() {
        let response = call(Some("Token abc")).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let response = call(Some("Bearer not-a-jwt")).await;
        assert!(!response.status().is_success());
    }

    #[tokio::test]
    async fn test_expired_access_token() {
        let issuer = TokenIssuer::new(TEST_SECRET.as_bytes(), 3600, 30 * 24 * 3600);
        let claims = issuer.claims_at(
            &identity(),
            TokenKind::Access,
            current_timestamp() - 3700,
            "expired".to_string(),
        );
        let token = issuer.encode(&claims).unwrap();

        let response = call(Some(&format!("Bearer {}", token))).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_msg(response).await, "Token has expired");
    }

    #[tokio::test]
    async fn test_refresh_token_not_accepted() {
        let state = create_test_state();
        let token = state.tokens.issue(&identity(), TokenKind::Refresh).unwrap();

        let response = build_router(state)
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_msg(response).await, "Only non-refresh tokens are allowed");
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let issuer = TokenIssuer::new(b"someone-else", 3600, 30 * 24 * 3600);
        let token = issuer.issue(&identity(), TokenKind::Access).unwrap();

        let response = call(Some(&format!("Bearer {}", token))).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_msg(response).await, "Signature verification failed");
    }

    #[tokio::test]
    async fn test_login_token_opens_protected_route() {
        let state = create_test_state();
        state
            .credentials
            .register(crate::models::auth::RegisterRequest {
                user_name: Some("alice".to_string()),
                role: Some("admin".to_string()),
                email: Some("alice@example.com".to_string()),
                password: Some("secret".to_string()),
            })
            .await
            .unwrap();
        let login = state
            .credentials
            .login(crate::models::auth::LoginRequest {
                email: Some("alice@example.com".to_string()),
                password: Some("secret".to_string()),
            })
            .await
            .unwrap();

        let response = build_router(state)
            .oneshot(request(Some(&format!("Bearer {}", login.access_token.unwrap()))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
