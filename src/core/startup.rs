use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::core::config::DatabaseConfig;
use crate::stores::memory_store::InMemoryUserStore;
use crate::stores::sqlite_store::SqliteUserStore;
use crate::stores::user_store::UserStore;

// this runs at boot time
pub async fn build_user_store(config: &DatabaseConfig) -> Result<Arc<dyn UserStore>> {
    let Some(url) = &config.url else {
        info!("No database configured, keeping users in memory");
        return Ok(Arc::new(InMemoryUserStore::new()));
    };

    let store = SqliteUserStore::connect(url, config.max_connections)
        .await
        .context(format!("Failed to connect to database '{}'", url))?;

    store
        .run_migrations()
        .await
        .context("Failed to run database migrations")?;

    let users = store.count().await.context("Failed to count users")?;
    info!(url = %url, users, "User store ready");

    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::NewUser;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_store_without_url() {
        let store = build_user_store(&DatabaseConfig::default()).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sqlite_store_with_url() {
        let temp_dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            url: Some(format!("sqlite://{}", temp_dir.path().join("db.sqlite").display())),
            max_connections: 2,
        };

        let store = build_user_store(&config).await.unwrap();
        store
            .create(NewUser {
                user_name: Some("alice".to_string()),
                role: None,
                email: Some("alice@example.com".to_string()),
                password_hash: "$2b$04$hash".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert!(temp_dir.path().join("db.sqlite").exists());
    }
}
