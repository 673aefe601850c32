pub mod auth;
pub mod health;
pub mod project;
pub mod reward;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
///
/// /user                                profile
/// /user/username                       rename (PATCH)
/// /user/password                       change password (PATCH)
/// /user/theme                          get, toggle (GET, PATCH)
///
/// /projects                            list, create
/// /projects/{id}                       get, update (PATCH), delete
/// /projects/{id}/logs                  create
/// /projects/{id}/logs/{log_id}         update (PATCH), delete
/// /projects/{id}/reward                create, update (PATCH), delete
///
/// /rewards                             rewards overview (GET)
/// ```
///
/// Everything except `/auth/*` requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/user", user::router())
        .nest("/projects", project::router())
        .nest("/rewards", reward::router())
}
