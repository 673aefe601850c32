//! Drag-and-drop status moves with optimistic update and rollback.
//!
//! A gesture runs `Idle -> Dragging -> Idle`, or through `Committing` when
//! the drop resolves to a new status:
//!
//! 1. [`DragController::pick_up`] records the project and its current status.
//! 2. [`DragController::release`] resolves the drop target. A no-op drop
//!    returns [`Release::Ignored`]; a real move writes the new status into
//!    the store right away and returns a [`PendingMove`].
//! 3. [`PendingMove::send`] issues the one persistence request.
//! 4. [`DragController::settle`] merges the server record, or reverts the
//!    optimistic status and raises a blocking notice.
//!
//! The split lets the caller release its borrow of the store while the
//! request is in flight. Moves are serialized per project: a project with a
//! move in flight cannot be picked up again until that move settles.

use std::collections::HashSet;

use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;

use crate::error::ClientError;
use crate::gateway::ProjectGateway;
use crate::model::Project;
use crate::notice::{Notice, Notices};
use crate::store::ProjectStore;

/// What the pointer was over when the gesture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column, identified by its status wire value.
    Column(String),
    /// Another card. Resolves to that card's current column.
    Card(DbId),
}

/// Why a release did not start a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Released outside any drop target.
    NoTarget,
    /// Unrecognized column id or unknown card.
    UnknownTarget,
    /// The target is the project's current column.
    SameStatus,
    /// Nothing was being dragged, or the project left the store mid-drag.
    NotDragging,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Release {
    Ignored(IgnoreReason),
    Move(PendingMove),
}

/// A committed optimistic move awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub project_id: DbId,
    pub previous_status: ProjectStatus,
    pub new_status: ProjectStatus,
}

impl PendingMove {
    /// Persist the move. Exactly one gateway call.
    pub async fn send<G>(&self, gateway: &G) -> Result<Project, ClientError>
    where
        G: ProjectGateway + ?Sized,
    {
        gateway
            .update_project_status(self.project_id, self.new_status)
            .await
    }
}

/// How a pending move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The server accepted it; carries the status it reported.
    Confirmed(ProjectStatus),
    /// The optimistic status was reverted.
    RolledBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PickUpError {
    #[error("Project {0} is not on the board")]
    UnknownProject(DbId),
    #[error("Project {0} already has a move in flight")]
    MoveInFlight(DbId),
    #[error("Another project is already being dragged")]
    AlreadyDragging,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    project_id: DbId,
    previous_status: ProjectStatus,
}

#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    in_flight: HashSet<DbId>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `project_id`.
    pub fn pick_up(&mut self, store: &ProjectStore, project_id: DbId) -> Result<(), PickUpError> {
        if self.session.is_some() {
            return Err(PickUpError::AlreadyDragging);
        }
        if self.in_flight.contains(&project_id) {
            return Err(PickUpError::MoveInFlight(project_id));
        }
        let previous_status = store
            .status_of(project_id)
            .ok_or(PickUpError::UnknownProject(project_id))?;

        self.session = Some(DragSession {
            project_id,
            previous_status,
        });
        Ok(())
    }

    /// Abandon the gesture without touching the store.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Project currently being dragged.
    pub fn dragging(&self) -> Option<DbId> {
        self.session.map(|s| s.project_id)
    }

    pub fn is_in_flight(&self, project_id: DbId) -> bool {
        self.in_flight.contains(&project_id)
    }

    /// End the gesture over `target`.
    ///
    /// Always returns the controller to idle. Only a drop that resolves to a
    /// recognized status different from the current one mutates the store.
    pub fn release(&mut self, store: &mut ProjectStore, target: Option<&DropTarget>) -> Release {
        let Some(session) = self.session.take() else {
            return Release::Ignored(IgnoreReason::NotDragging);
        };
        let Some(target) = target else {
            return Release::Ignored(IgnoreReason::NoTarget);
        };
        let Some(new_status) = resolve_target(store, target) else {
            tracing::debug!(project_id = session.project_id, ?target, "Drop on unknown target ignored");
            return Release::Ignored(IgnoreReason::UnknownTarget);
        };
        let Some(current) = store.status_of(session.project_id) else {
            return Release::Ignored(IgnoreReason::NotDragging);
        };
        if current == new_status {
            return Release::Ignored(IgnoreReason::SameStatus);
        }
        if current != session.previous_status {
            tracing::debug!(
                project_id = session.project_id,
                picked_up = %session.previous_status,
                current = %current,
                "Status changed under the drag"
            );
        }

        store.set_status(session.project_id, new_status);
        self.in_flight.insert(session.project_id);
        tracing::debug!(
            project_id = session.project_id,
            from = %current,
            to = %new_status,
            "Optimistic move applied"
        );

        // Rollback target is the status at commit time, not at pick-up.
        Release::Move(PendingMove {
            project_id: session.project_id,
            previous_status: current,
            new_status,
        })
    }

    /// Reconcile a pending move with the result of [`PendingMove::send`].
    pub fn settle(
        &mut self,
        store: &mut ProjectStore,
        notices: &mut Notices,
        pending: PendingMove,
        outcome: Result<Project, ClientError>,
    ) -> Settled {
        self.in_flight.remove(&pending.project_id);

        match outcome {
            Ok(project) => {
                let status = project.status;
                store.apply_canonical(project);
                Settled::Confirmed(status)
            }
            Err(err) => {
                tracing::warn!(
                    project_id = pending.project_id,
                    to = %pending.new_status,
                    error = %err,
                    "Status move failed, rolling back"
                );
                store.restore_status(
                    pending.project_id,
                    pending.new_status,
                    pending.previous_status,
                );
                let title = store
                    .get(pending.project_id)
                    .map(|p| p.title.as_str())
                    .unwrap_or("project");
                notices.push(Notice::new(format!(
                    "Could not move \"{title}\" to {}. It was returned to {}.",
                    pending.new_status.label(),
                    pending.previous_status.label(),
                )));
                Settled::RolledBack
            }
        }
    }
}

fn resolve_target(store: &ProjectStore, target: &DropTarget) -> Option<ProjectStatus> {
    match target {
        DropTarget::Column(id) => ProjectStatus::parse(id),
        DropTarget::Card(card_id) => store.status_of(*card_id),
    }
}
