use crate::core::error::StoreError;
use crate::models::user::{NewUser, User};
use crate::stores::user_store::UserStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// In-memory user store, used when no database is configured
pub struct InMemoryUserStore {
    users: DashMap<i64, Arc<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = user.into_user(id);
        self.users.insert(id, Arc::new(user.clone()));
        Ok(user)
    }

    async fn find_by_email(&self, email: Option<&str>) -> Result<Option<User>, StoreError> {
        // DashMap iteration order is arbitrary, so pick the lowest id explicitly
        let found = self
            .users
            .iter()
            .filter(|entry| entry.value().email.as_deref() == email)
            .min_by_key(|entry| *entry.key())
            .map(|entry| User::clone(entry.value()));

        Ok(found)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.users.len() as u64)
    }
}
