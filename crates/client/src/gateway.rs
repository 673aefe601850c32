//! Persistence seam used by the board session and the drag controller.

use async_trait::async_trait;
use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;

use crate::error::ClientError;
use crate::model::Project;

/// Access to the caller's projects. The owner is implied by the credentials
/// the implementation carries.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Every project of the caller, with logs and reward.
    async fn list_projects(&self) -> Result<Vec<Project>, ClientError>;

    /// Persist a new status and return the canonical record.
    async fn update_project_status(
        &self,
        project_id: DbId,
        status: ProjectStatus,
    ) -> Result<Project, ClientError>;
}
