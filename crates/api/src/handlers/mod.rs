//! Request handlers for the project board.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input with `taskboard_core`, enforce ownership, delegate
//! to the corresponding repository in `taskboard_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod log;
pub mod project;
pub mod reward;
pub mod user;
