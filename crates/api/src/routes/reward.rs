//! Route definitions for the `/rewards` overview.

use axum::routing::get;
use axum::Router;

use crate::handlers::reward;
use crate::state::AppState;

/// Routes mounted at `/rewards`.
///
/// ```text
/// GET / -> list_overview
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(reward::list_overview))
}
