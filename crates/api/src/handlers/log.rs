//! Handlers for progress logs, nested under `/projects/{id}/logs`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::validate_required_text;
use taskboard_db::models::log::{CreateLog, Log};
use taskboard_db::repositories::LogRepo;

use crate::error::AppResult;
use crate::handlers::project::load_owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for creating or editing a log.
#[derive(Debug, Deserialize)]
pub struct LogContentRequest {
    #[serde(default)]
    pub content: String,
}

/// A log that exists but belongs to another project is reported as missing.
async fn load_project_log(pool: &PgPool, project_id: DbId, log_id: DbId) -> AppResult<Log> {
    match LogRepo::find_by_id(pool, log_id).await? {
        Some(log) if log.project_id == project_id => Ok(log),
        _ => Err(CoreError::NotFound {
            entity: "Log",
            id: log_id,
        }
        .into()),
    }
}

/// POST /api/v1/projects/{id}/logs
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<LogContentRequest>,
) -> AppResult<(StatusCode, Json<Log>)> {
    validate_required_text("Content", &input.content)?;
    load_owned_project(&state.pool, project_id, auth.user_id).await?;

    let log = LogRepo::create(
        &state.pool,
        &CreateLog {
            project_id,
            content: input.content,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// PATCH /api/v1/projects/{id}/logs/{log_id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, log_id)): Path<(DbId, DbId)>,
    Json(input): Json<LogContentRequest>,
) -> AppResult<Json<Log>> {
    validate_required_text("Content", &input.content)?;
    load_owned_project(&state.pool, project_id, auth.user_id).await?;
    load_project_log(&state.pool, project_id, log_id).await?;

    let log = LogRepo::update_content(&state.pool, log_id, &input.content)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Log",
            id: log_id,
        })?;
    Ok(Json(log))
}

/// DELETE /api/v1/projects/{id}/logs/{log_id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((project_id, log_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    load_owned_project(&state.pool, project_id, auth.user_id).await?;
    load_project_log(&state.pool, project_id, log_id).await?;

    LogRepo::delete(&state.pool, log_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
