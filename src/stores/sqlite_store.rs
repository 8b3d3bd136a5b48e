use crate::core::error::StoreError;
use crate::models::user::{NewUser, User};
use crate::stores::user_store::UserStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_USER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id        INTEGER NOT NULL PRIMARY KEY,
        user_name VARCHAR(64),
        role      VARCHAR(6),
        email     VARCHAR(64),
        password  VARCHAR(64)
    )"#;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    user_name: Option<String>,
    role: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            user_name: row.user_name,
            role: row.role,
            email: row.email,
            password: row.password.unwrap_or_default(),
        }
    }
}

/// User store backed by a SQLite database
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Connect to `url`, creating the database file if it does not exist
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty database
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;

        info!(url = %url, in_memory, "Connected to SQLite user store");

        Ok(Self { pool })
    }

    /// Create the `user` table if it is missing
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_USER_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Migration(format!("create table user: {}", e)))?;

        debug!("User table migration applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let result = sqlx::query(
            r#"INSERT INTO "user" (user_name, role, email, password) VALUES (?, ?, ?, ?)"#,
        )
        .bind(user.user_name.as_deref())
        .bind(user.role.as_deref())
        .bind(user.email.as_deref())
        .bind(user.password_hash.as_str())
        .execute(&self.pool)
        .await?;

        Ok(user.into_user(result.last_insert_rowid()))
    }

    async fn find_by_email(&self, email: Option<&str>) -> Result<Option<User>, StoreError> {
        // `IS` compares NULL to NULL as equal
        let row = sqlx::query_as::<_, UserRow>(
            r#"SELECT id, user_name, role, email, password FROM "user"
               WHERE email IS ? ORDER BY id LIMIT 1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "user""#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}
