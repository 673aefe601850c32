//! Handlers for a project's reward and the rewards overview.
//!
//! Adding a reward is open to the owner; editing or removing one requires
//! the owner to re-enter their password.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;
use taskboard_core::validation::validate_required_text;
use taskboard_db::models::reward::{CreateReward, Reward, RewardOverview};
use taskboard_db::repositories::RewardRepo;

use crate::auth::password::confirm_password;
use crate::error::AppResult;
use crate::handlers::project::load_owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /projects/{id}/reward`.
#[derive(Debug, Deserialize)]
pub struct CreateRewardRequest {
    #[serde(default)]
    pub description: String,
}

/// Request body for `PATCH /projects/{id}/reward`.
#[derive(Debug, Deserialize)]
pub struct UpdateRewardRequest {
    #[serde(default)]
    pub description: String,
    pub password: Option<String>,
}

/// Request body for `DELETE /projects/{id}/reward`.
#[derive(Debug, Deserialize)]
pub struct DeleteRewardRequest {
    pub password: Option<String>,
}

const REWARD_FIELD: &str = "Reward description";

async fn load_reward(state: &AppState, project_id: DbId) -> AppResult<Reward> {
    let reward = RewardRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reward for project",
            id: project_id,
        })?;
    Ok(reward)
}

/// POST /api/v1/projects/{id}/reward
///
/// 409 if the project already has a reward. When the server is configured
/// with `REWARD_REQUIRES_COMPLETION`, the project must be `complete`.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateRewardRequest>,
) -> AppResult<(StatusCode, Json<Reward>)> {
    validate_required_text(REWARD_FIELD, &input.description)?;
    let project = load_owned_project(&state.pool, project_id, auth.user_id).await?;

    if state.config.reward_requires_completion && project.status != ProjectStatus::Complete {
        return Err(CoreError::Validation(
            "Can only add rewards to completed projects".into(),
        )
        .into());
    }

    if RewardRepo::find_by_project(&state.pool, project_id)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict("Project already has a reward".into()).into());
    }

    // The unique constraint still guards the race between check and insert.
    let reward = RewardRepo::create(
        &state.pool,
        &CreateReward {
            project_id,
            description: input.description,
        },
    )
    .await?;

    tracing::info!(project_id, reward_id = reward.id, "Reward recorded");
    Ok((StatusCode::CREATED, Json(reward)))
}

/// PATCH /api/v1/projects/{id}/reward
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateRewardRequest>,
) -> AppResult<Json<Reward>> {
    validate_required_text(REWARD_FIELD, &input.description)?;
    confirm_password(&state.pool, auth.user_id, input.password.as_deref()).await?;
    load_owned_project(&state.pool, project_id, auth.user_id).await?;
    let reward = load_reward(&state, project_id).await?;

    let updated = RewardRepo::update_description(&state.pool, reward.id, &input.description)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reward",
            id: reward.id,
        })?;
    Ok(Json(updated))
}

/// DELETE /api/v1/projects/{id}/reward
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<DeleteRewardRequest>,
) -> AppResult<StatusCode> {
    confirm_password(&state.pool, auth.user_id, input.password.as_deref()).await?;
    load_owned_project(&state.pool, project_id, auth.user_id).await?;
    let reward = load_reward(&state, project_id).await?;

    RewardRepo::delete(&state.pool, reward.id).await?;
    tracing::info!(project_id, reward_id = reward.id, "Reward removed");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/rewards
///
/// Every reward the caller has earned, newest first.
pub async fn list_overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<RewardOverview>>> {
    let rewards = RewardRepo::list_overview_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(rewards))
}
