//! Handlers for the authenticated user's own account (`/user`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::account::{validate_password_strength, validate_username};
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::models::user::{User, UserResponse};
use taskboard_db::repositories::UserRepo;

use crate::auth::password::{confirm_password, hash_for_storage};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PATCH /user/username`.
#[derive(Debug, Deserialize)]
pub struct UpdateUsernameRequest {
    #[serde(default)]
    pub username: String,
}

/// Request body for `PATCH /user/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    #[serde(default)]
    pub new_password: String,
}

async fn load_user(state: &AppState, user_id: DbId) -> AppResult<User> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;
    Ok(user)
}

/// GET /api/v1/user
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = load_user(&state, auth.user_id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /api/v1/user/username
pub async fn update_username(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateUsernameRequest>,
) -> AppResult<Json<UserResponse>> {
    let username = validate_username(&input.username)?;

    if let Some(existing) = UserRepo::find_by_username(&state.pool, &username).await? {
        if existing.id != auth.user_id {
            return Err(CoreError::Conflict("Username already taken".into()).into());
        }
    }

    let user = UserRepo::update_username(&state.pool, auth.user_id, &username)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        })?;
    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /api/v1/user/password
///
/// Requires the current password. Returns 204 No Content.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password, state.config.password_min_length)?;
    confirm_password(&state.pool, auth.user_id, input.current_password.as_deref()).await?;

    let hash = hash_for_storage(&input.new_password)?;
    UserRepo::update_password(&state.pool, auth.user_id, &hash).await?;

    tracing::info!(user_id = auth.user_id, "Password changed");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/user/theme
pub async fn get_theme(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<UserResponse>> {
    me(State(state), auth).await
}

/// PATCH /api/v1/user/theme
///
/// Flip between dark and light.
pub async fn toggle_theme(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = load_user(&state, auth.user_id).await?;
    let user = UserRepo::set_theme(&state.pool, user.id, user.theme.toggled())
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        })?;
    Ok(Json(UserResponse::from(&user)))
}
