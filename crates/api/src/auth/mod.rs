//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing, verification, and the
//!   re-entered-password capability check used for sensitive edits.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod jwt;
pub mod password;
