//! Reward entity model, DTOs and the rewards overview projection.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// A row from the `rewards` table. At most one per project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reward {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateReward {
    pub project_id: DbId,
    pub description: String,
}

/// Joined reward + project row, as selected by
/// [`RewardRepo::list_overview_by_user`](crate::repositories::RewardRepo::list_overview_by_user).
#[derive(Debug, Clone, FromRow)]
pub struct RewardOverviewRow {
    pub id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub project_id: DbId,
    pub project_title: String,
    pub project_description: String,
    pub project_created_at: Timestamp,
    pub project_updated_at: Timestamp,
}

/// Project fields shown next to a reward in the overview.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry of the rewards overview.
#[derive(Debug, Clone, Serialize)]
pub struct RewardOverview {
    pub id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub project: ProjectSummary,
}

impl From<RewardOverviewRow> for RewardOverview {
    fn from(row: RewardOverviewRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            created_at: row.created_at,
            project: ProjectSummary {
                id: row.project_id,
                title: row.project_title,
                description: row.project_description,
                created_at: row.project_created_at,
                updated_at: row.project_updated_at,
            },
        }
    }
}
