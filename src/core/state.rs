// Application state (AppState)

use crate::core::config::Config;
use crate::security::tokens::TokenIssuer;
use crate::service::credentials::CredentialService;
use crate::stores::user_store::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub credentials: Arc<CredentialService>,

    /// Token signing and verification, shared with the bearer gate
    pub tokens: Arc<TokenIssuer>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn UserStore>) -> Self {
        let config = Arc::new(config);

        let tokens = Arc::new(TokenIssuer::from_config(&config.auth));

        let credentials = Arc::new(CredentialService::from_config(
            &config,
            store,
            Arc::clone(&tokens),
        ));

        Self {
            credentials,
            tokens,
            config,
        }
    }
}
