//! Registration and login.
//!
//! Login answers with `status: true` whenever the request was handled, and
//! hands out tokens as soon as the email matches a stored user, whether or
//! not the password was right. Set `auth.withhold_tokens_on_mismatch` to
//! issue tokens only for a matching password.

use crate::core::config::Config;
use crate::core::error::ApiError;
use crate::models::auth::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, INCORRECT_PASSWORD_MESSAGE,
    LOGGED_IN_MESSAGE, REGISTERED_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
use crate::models::user::NewUser;
use crate::security::password::PasswordHasher;
use crate::security::tokens::{Identity, TokenIssuer};
use crate::stores::user_store::UserStore;
use crate::validation::credentials::{require_password, validate_login, validate_registration};
use std::sync::Arc;
use tracing::{debug, info};

pub struct CredentialService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenIssuer>,
    strict_validation: bool,
    withhold_tokens_on_mismatch: bool,
}

impl CredentialService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenIssuer>,
        strict_validation: bool,
        withhold_tokens_on_mismatch: bool,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
            strict_validation,
            withhold_tokens_on_mismatch,
        }
    }

    pub fn from_config(config: &Config, store: Arc<dyn UserStore>, tokens: Arc<TokenIssuer>) -> Self {
        let hasher = PasswordHasher::new(config.auth.bcrypt_cost);
        info!(
            bcrypt_cost = hasher.cost(),
            strict_validation = config.validation.strict,
            withhold_tokens_on_mismatch = config.auth.withhold_tokens_on_mismatch,
            "Credential service configured"
        );

        Self::new(
            store,
            hasher,
            tokens,
            config.validation.strict,
            config.auth.withhold_tokens_on_mismatch,
        )
    }

    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    /// Hash the password and store a new user. Duplicates are not checked.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        validate_registration(&request, self.strict_validation)?;

        let password = require_password(request.password.as_deref())?.to_string();
        let password_hash = self.hasher.hash_blocking(password).await?;

        let user = self
            .store
            .create(NewUser {
                user_name: request.user_name,
                role: request.role,
                email: request.email,
                password_hash,
            })
            .await?;

        info!(
            user_id = user.id,
            user_name = ?user.user_name,
            role = ?user.role,
            "User registered"
        );

        Ok(RegisterResponse {
            status: true,
            message: REGISTERED_MESSAGE.to_string(),
        })
    }

    /// Look the user up by email and check the password.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let Some(user) = self.store.find_by_email(request.email.as_deref()).await? else {
            debug!(email = ?request.email, "Login for unknown email");
            return Ok(LoginResponse {
                status: true,
                message: USER_NOT_FOUND_MESSAGE.to_string(),
                access_token: None,
                refresh_token: None,
            });
        };

        let password = validate_login(&request)?.to_string();
        let matched = self
            .hasher
            .verify_blocking(password, user.password.clone())
            .await?;

        let message = if matched {
            LOGGED_IN_MESSAGE
        } else {
            INCORRECT_PASSWORD_MESSAGE
        };

        let (access_token, refresh_token) = if matched || !self.withhold_tokens_on_mismatch {
            let pair = self.tokens.issue_pair(&Identity::of(&user))?;
            (Some(pair.access_token), Some(pair.refresh_token))
        } else {
            (None, None)
        };

        info!(
            user_id = user.id,
            password_matched = matched,
            tokens_issued = access_token.is_some(),
            "Login handled"
        );

        Ok(LoginResponse {
            status: true,
            message: message.to_string(),
            access_token,
            refresh_token,
        })
    }
}
