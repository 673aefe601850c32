//! Route definitions for the `/user` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET   /           -> me
/// PATCH /username   -> update_username
/// PATCH /password   -> change_password
/// GET   /theme      -> get_theme
/// PATCH /theme      -> toggle_theme
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::me))
        .route("/username", patch(user::update_username))
        .route("/password", patch(user::change_password))
        .route("/theme", get(user::get_theme).patch(user::toggle_theme))
}
