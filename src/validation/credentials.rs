use crate::core::error::ValidationError;
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::models::user::{EMAIL_MAX_LEN, ROLE_MAX_LEN, USER_NAME_MAX_LEN};

/// Check a registration body before it is hashed and stored.
///
/// A non-empty password is always required since it cannot be hashed
/// otherwise. In strict mode the column lengths and the email format are
/// enforced as well; outside strict mode the remaining fields are stored as given.
pub fn validate_registration(request: &RegisterRequest, strict: bool) -> Result<(), ValidationError> {
    require_password(request.password.as_deref())?;

    if !strict {
        return Ok(());
    }

    check_length("user_name", request.user_name.as_deref(), USER_NAME_MAX_LEN)?;
    check_length("role", request.role.as_deref(), ROLE_MAX_LEN)?;
    check_length("email", request.email.as_deref(), EMAIL_MAX_LEN)?;

    match request.email.as_deref() {
        Some(email) if is_valid_email(email) => Ok(()),
        Some(email) => Err(ValidationError::InvalidEmail(email.to_string())),
        None => Err(ValidationError::MissingField("email")),
    }
}

/// Returns the password to check against the stored hash.
///
/// Only an absent password is rejected; an empty one is compared like any
/// other string and simply fails to match.
pub fn validate_login(request: &LoginRequest) -> Result<&str, ValidationError> {
    request
        .password
        .as_deref()
        .ok_or(ValidationError::MissingField("password"))
}

/// Returns the password when it is present and non-empty
pub fn require_password(password: Option<&str>) -> Result<&str, ValidationError> {
    match password {
        Some(password) if !password.is_empty() => Ok(password),
        _ => Err(ValidationError::MissingField("password")),
    }
}

fn check_length(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    let actual = value.map(|v| v.chars().count()).unwrap_or(0);
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

/// Structural email check: `local@domain.tld` with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}
