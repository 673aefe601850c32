//! Route definitions for the `/projects` resource.
//!
//! Also nests log and reward routes under `/projects/{id}/...`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{log, project, reward};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
///
/// POST   /{id}/logs              -> log::create
/// PATCH  /{id}/logs/{log_id}     -> log::update
/// DELETE /{id}/logs/{log_id}     -> log::delete
///
/// POST   /{id}/reward            -> reward::create
/// PATCH  /{id}/reward            -> reward::update
/// DELETE /{id}/reward            -> reward::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/logs", post(log::create))
        .route("/{id}/logs/{log_id}", patch(log::update).delete(log::delete))
        .route(
            "/{id}/reward",
            post(reward::create)
                .patch(reward::update)
                .delete(reward::delete),
        )
}
