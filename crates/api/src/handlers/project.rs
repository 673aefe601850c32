//! Handlers for the `/projects` resource.
//!
//! Every handler resolves the project first (404 when missing) and then
//! checks ownership (403 for other users' projects). Project-returning
//! handlers always respond with the full [`ProjectDetail`] so clients can
//! reconcile their local copy from a single response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;
use taskboard_core::error::CoreError;
use taskboard_core::ownership::ensure_owner;
use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;
use taskboard_core::validation::{validate_description, validate_title};
use taskboard_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use taskboard_db::repositories::ProjectRepo;

use crate::auth::password::confirm_password;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for `PATCH /projects/{id}`.
///
/// `status` is kept as a string so unknown values get a validation message
/// instead of a body rejection. Editing `title` or `description` requires
/// `password`; a status-only change does not.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub password: Option<String>,
}

impl UpdateProjectRequest {
    fn edits_text(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

/// Load a project the caller owns.
pub(crate) async fn load_owned_project(
    pool: &PgPool,
    id: DbId,
    user_id: DbId,
) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    ensure_owner(project.user_id, user_id)?;
    Ok(project)
}

/// GET /api/v1/projects
///
/// The caller's projects in creation order, each with logs and reward.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    let projects = ProjectRepo::list_by_user(&state.pool, auth.user_id).await?;
    let details = ProjectRepo::with_children(&state.pool, projects).await?;
    Ok(Json(details))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectDetail>)> {
    let title = validate_title(&input.title)?;
    validate_description(&input.description)?;

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            user_id: auth.user_id,
            title,
            description: input.description,
        },
    )
    .await?;

    tracing::info!(project_id = project.id, user_id = auth.user_id, "Project created");
    Ok((
        StatusCode::CREATED,
        Json(ProjectDetail {
            project,
            logs: Vec::new(),
            reward: None,
        }),
    ))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = load_owned_project(&state.pool, id, auth.user_id).await?;
    let detail = ProjectRepo::detail(&state.pool, project).await?;
    Ok(Json(detail))
}

/// PATCH /api/v1/projects/{id}
///
/// Partial update. Status transitions are unconstrained.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectRequest>,
) -> AppResult<Json<ProjectDetail>> {
    let status = input
        .status
        .as_deref()
        .map(str::parse::<ProjectStatus>)
        .transpose()?;
    let title = input.title.as_deref().map(validate_title).transpose()?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }

    let current = load_owned_project(&state.pool, id, auth.user_id).await?;

    if input.edits_text() {
        confirm_password(&state.pool, auth.user_id, input.password.as_deref()).await?;
    }

    let changes = UpdateProject {
        title,
        description: input.description,
        status,
    };
    let project = ProjectRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;

    if let Some(status) = status {
        tracing::debug!(
            project_id = id,
            from = %current.status,
            to = %status,
            "Project status changed"
        );
    }

    let detail = ProjectRepo::detail(&state.pool, project).await?;
    Ok(Json(detail))
}

/// DELETE /api/v1/projects/{id}
///
/// Logs and the reward are removed with the project.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    load_owned_project(&state.pool, id, auth.user_id).await?;

    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, user_id = auth.user_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound {
            entity: "Project",
            id,
        }
        .into())
    }
}
