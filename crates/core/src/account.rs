//! Username and password rules for registration and account settings.

use crate::error::CoreError;

/// Minimum username length, in characters.
pub const MIN_USERNAME_LEN: usize = 3;

/// Maximum username length, in characters.
pub const MAX_USERNAME_LEN: usize = 50;

/// Default minimum password length when not configured.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

/// Validate a username. Returns the trimmed value.
pub fn validate_username(username: &str) -> Result<String, CoreError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Username is required".to_string()));
    }
    let len = trimmed.chars().count();
    if len < MIN_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    if len > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation("Password is required".to_string()));
    }
    if password.chars().count() < min_length {
        return Err(CoreError::Validation(format!(
            "Password must be at least {min_length} characters long"
        )));
    }
    Ok(())
}
