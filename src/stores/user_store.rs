use crate::core::error::StoreError;
use crate::models::user::{NewUser, User};
use async_trait::async_trait;

/// Persistence boundary for user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// First user (lowest id) whose email equals `email` exactly.
    /// `None` matches users stored without an email.
    async fn find_by_email(&self, email: Option<&str>) -> Result<Option<User>, StoreError>;

    /// Number of stored users
    async fn count(&self) -> Result<u64, StoreError>;
}
