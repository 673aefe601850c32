//! Repository for the `rewards` table.

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::reward::{CreateReward, Reward, RewardOverview, RewardOverviewRow};

const COLUMNS: &str = "id, project_id, description, created_at";

/// Provides CRUD operations for rewards.
pub struct RewardRepo;

impl RewardRepo {
    /// Insert a reward. A second reward for the same project violates
    /// `uq_rewards_project_id`.
    pub async fn create(pool: &PgPool, input: &CreateReward) -> Result<Reward, sqlx::Error> {
        let query = format!(
            "INSERT INTO rewards (project_id, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reward>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Reward>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rewards WHERE project_id = $1");
        sqlx::query_as::<_, Reward>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Reward>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM rewards WHERE project_id = ANY($1)");
        sqlx::query_as::<_, Reward>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }

    /// Returns `None` if the reward does not exist.
    pub async fn update_description(
        pool: &PgPool,
        id: DbId,
        description: &str,
    ) -> Result<Option<Reward>, sqlx::Error> {
        let query =
            format!("UPDATE rewards SET description = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Reward>(&query)
            .bind(id)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rewards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every reward the user has earned, newest first, with a project summary.
    pub async fn list_overview_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RewardOverview>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RewardOverviewRow>(
            "SELECT r.id, r.description, r.created_at,
                    p.id AS project_id,
                    p.title AS project_title,
                    p.description AS project_description,
                    p.created_at AS project_created_at,
                    p.updated_at AS project_updated_at
             FROM rewards r
             JOIN projects p ON p.id = r.project_id
             WHERE p.user_id = $1
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(RewardOverview::from).collect())
    }
}
