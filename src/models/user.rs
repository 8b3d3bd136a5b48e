use serde::{Deserialize, Serialize};

/// Column limits of the `user` table
pub const USER_NAME_MAX_LEN: usize = 64;
pub const ROLE_MAX_LEN: usize = 6;
pub const EMAIL_MAX_LEN: usize = 64;

/// A persisted user account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity
    pub id: i64,
    pub user_name: Option<String>,
    pub role: Option<String>,
    /// Login key; neither unique nor format-checked by the store
    pub email: Option<String>,
    /// bcrypt hash of the password
    pub password: String,
}

/// Fields of a user that has not been stored yet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub user_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            user_name: self.user_name,
            role: self.role,
            email: self.email,
            password: self.password_hash,
        }
    }
}
