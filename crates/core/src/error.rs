//! Domain failures shared by the record store, the API and the client.
//!
//! Each variant maps to exactly one HTTP status in the API layer, so the
//! message carried here is what the caller sees.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A project, log, reward or user id that does not resolve.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Rejected input: blank title, unknown status, short password.
    #[error("{0}")]
    Validation(String),

    /// Taken username or a second reward on one project.
    #[error("{0}")]
    Conflict(String),

    /// Missing credentials or a wrong password.
    #[error("{0}")]
    Unauthorized(String),

    /// The resource belongs to another user.
    #[error("{0}")]
    Forbidden(String),
}
