//! Repository for the `projects` table.

use std::collections::HashMap;

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::log::Log;
use crate::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use crate::models::reward::Reward;
use crate::repositories::{LogRepo, RewardRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, status, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project in the `todo` status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID, regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects in creation order (oldest first).
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Logs and the reward cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach logs and rewards to a batch of projects, preserving their order.
    ///
    /// Runs two queries regardless of the number of projects.
    pub async fn with_children(
        pool: &PgPool,
        projects: Vec<Project>,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();

        let mut logs: HashMap<DbId, Vec<Log>> = HashMap::new();
        for log in LogRepo::list_by_projects(pool, &ids).await? {
            logs.entry(log.project_id).or_default().push(log);
        }
        let mut rewards: HashMap<DbId, Reward> = RewardRepo::list_by_projects(pool, &ids)
            .await?
            .into_iter()
            .map(|r| (r.project_id, r))
            .collect();

        let details = projects
            .into_iter()
            .map(|project| ProjectDetail {
                logs: logs.remove(&project.id).unwrap_or_default(),
                reward: rewards.remove(&project.id),
                project,
            })
            .collect();
        Ok(details)
    }

    /// Load a single project together with its logs and reward.
    pub async fn detail(pool: &PgPool, project: Project) -> Result<ProjectDetail, sqlx::Error> {
        let logs = LogRepo::list_by_project(pool, project.id).await?;
        let reward = RewardRepo::find_by_project(pool, project.id).await?;
        Ok(ProjectDetail {
            project,
            logs,
            reward,
        })
    }
}
