//! Repository for the `logs` table.

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::log::{CreateLog, Log};

const COLUMNS: &str = "id, project_id, content, created_at";

/// Provides CRUD operations for progress logs.
pub struct LogRepo;

impl LogRepo {
    pub async fn create(pool: &PgPool, input: &CreateLog) -> Result<Log, sqlx::Error> {
        let query = format!(
            "INSERT INTO logs (project_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(input.project_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Log>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM logs WHERE id = $1");
        sqlx::query_as::<_, Log>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Logs of one project, oldest first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Log>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM logs WHERE project_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Logs of several projects, oldest first.
    pub async fn list_by_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Log>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM logs WHERE project_id = ANY($1) ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Log>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }

    /// Replace a log's content. Returns `None` if the log does not exist.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Log>, sqlx::Error> {
        let query = format!("UPDATE logs SET content = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Log>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
