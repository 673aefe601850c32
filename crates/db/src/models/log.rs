//! Progress log entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// A row from the `logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Log {
    pub id: DbId,
    pub project_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateLog {
    pub project_id: DbId,
    pub content: String,
}
