//! Wire records as returned by the board API.

use serde::{Deserialize, Serialize};
use taskboard_core::status::ProjectStatus;
use taskboard_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub id: DbId,
    pub project_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub created_at: Timestamp,
}

/// A project with its logs (oldest first) and optional reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub logs: Vec<Log>,
    #[serde(default)]
    pub reward: Option<Reward>,
}
