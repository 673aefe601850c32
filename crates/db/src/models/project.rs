//! Project entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::status::ProjectStatus;
use taskboard_core::types::{DbId, Timestamp};

use crate::models::log::Log;
use crate::models::reward::Reward;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. New projects always start in `todo`.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub user_id: DbId,
    pub title: String,
    pub description: String,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// The canonical project record returned to clients: the row plus its
/// logs (oldest first) and its reward, if any.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub logs: Vec<Log>,
    pub reward: Option<Reward>,
}
