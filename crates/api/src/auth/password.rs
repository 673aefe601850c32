//! Argon2id password hashing and the re-entered-password capability check.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::PgPool;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Hash for a handler, mapping hasher failures to a sanitized 500.
pub fn hash_for_storage(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Require the caller to re-enter their password before a sensitive edit.
///
/// - missing or empty password: 400
/// - user no longer exists: 404
/// - wrong password: 401
pub async fn confirm_password(
    pool: &PgPool,
    user_id: DbId,
    password: Option<&str>,
) -> AppResult<()> {
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CoreError::Validation("Password is required".into()))?;

    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;

    let valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::debug!(user_id, "Password confirmation failed");
        return Err(CoreError::Unauthorized("Invalid password".into()).into());
    }
    Ok(())
}
