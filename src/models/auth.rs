use serde::{Deserialize, Serialize};

pub const REGISTERED_MESSAGE: &str = "User Added Successfully";
pub const LOGGED_IN_MESSAGE: &str = "User logged in Successfully";
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect Password";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found please register";
pub const PROTECTED_MESSAGE: &str = "This route is protected";

/// POST /register body. Every field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub status: bool,
    pub message: String,
}

/// POST /login body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `status` reports that the request was handled, not that the login succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: bool,
    pub message: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
}
