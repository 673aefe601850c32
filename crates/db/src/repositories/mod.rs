//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod log_repo;
pub mod project_repo;
pub mod reward_repo;
pub mod user_repo;

pub use log_repo::LogRepo;
pub use project_repo::ProjectRepo;
pub use reward_repo::RewardRepo;
pub use user_repo::UserRepo;
