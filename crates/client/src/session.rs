//! One user's board: store, drag controller and notices over a gateway.

use taskboard_core::types::DbId;

use crate::board::Board;
use crate::drag::{DragController, DropTarget, IgnoreReason, PickUpError, Release, Settled};
use crate::error::ClientError;
use crate::gateway::ProjectGateway;
use crate::notice::Notices;
use crate::store::ProjectStore;

/// Result of [`BoardSession::drop_on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Ignored(IgnoreReason),
    Settled(Settled),
}

pub struct BoardSession<G> {
    gateway: G,
    store: ProjectStore,
    controller: DragController,
    notices: Notices,
}

impl<G: ProjectGateway> BoardSession<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            store: ProjectStore::new(),
            controller: DragController::new(),
            notices: Notices::new(),
        }
    }

    /// Reload every project from the gateway.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let projects = self.gateway.list_projects().await?;
        tracing::debug!(count = projects.len(), "Board refreshed");
        self.store.replace_all(projects);
        Ok(())
    }

    pub fn board(&self) -> Board<'_> {
        Board::partition(self.store.projects())
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn open_detail(&mut self, project_id: DbId) -> bool {
        self.store.open_detail(project_id)
    }

    pub fn close_detail(&mut self) {
        self.store.close_detail();
    }

    pub fn pick_up(&mut self, project_id: DbId) -> Result<(), PickUpError> {
        self.controller.pick_up(&self.store, project_id)
    }

    pub fn cancel_drag(&mut self) -> bool {
        self.controller.cancel()
    }

    /// Finish the current drag over `target` and wait for the move to settle.
    pub async fn drop_on(&mut self, target: Option<DropTarget>) -> DropOutcome {
        let pending = match self.controller.release(&mut self.store, target.as_ref()) {
            Release::Ignored(reason) => return DropOutcome::Ignored(reason),
            Release::Move(pending) => pending,
        };

        let outcome = pending.send(&self.gateway).await;
        DropOutcome::Settled(self.controller.settle(
            &mut self.store,
            &mut self.notices,
            pending,
            outcome,
        ))
    }
}

#[cfg(test)]
mod tests {
    use taskboard_core::status::ProjectStatus;

    use super::*;
    use crate::drag::tests::MockGateway;
    use crate::store::tests::project;

    async fn session_with(projects: &[crate::model::Project]) -> BoardSession<MockGateway> {
        let mut session = BoardSession::new(MockGateway::with_projects(projects));
        session.refresh().await.unwrap();
        session
    }

    #[tokio::test]
    async fn refresh_loads_the_board() {
        let session = session_with(&[
            project(1, "a", ProjectStatus::Todo),
            project(2, "b", ProjectStatus::Obsolete),
        ])
        .await;

        let board = session.board();
        assert!(board.column(ProjectStatus::Todo).contains(1));
        assert!(board.column(ProjectStatus::Obsolete).contains(2));
    }

    #[tokio::test]
    async fn drop_on_column_persists_the_move() {
        let mut session = session_with(&[project(1, "a", ProjectStatus::Todo)]).await;

        session.pick_up(1).unwrap();
        let outcome = session
            .drop_on(Some(DropTarget::Column("complete".into())))
            .await;

        assert_eq!(
            outcome,
            DropOutcome::Settled(Settled::Confirmed(ProjectStatus::Complete))
        );
        assert!(session.board().column(ProjectStatus::Complete).contains(1));
        assert_eq!(session.gateway().calls(), vec![(1, ProjectStatus::Complete)]);
    }

    #[tokio::test]
    async fn drop_on_same_column_makes_no_request() {
        let mut session = session_with(&[project(1, "a", ProjectStatus::Todo)]).await;

        session.pick_up(1).unwrap();
        let outcome = session.drop_on(Some(DropTarget::Column("todo".into()))).await;

        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::SameStatus));
        assert!(session.gateway().calls().is_empty());
    }

    #[tokio::test]
    async fn failed_drop_rolls_back_and_notifies() {
        let mut session = session_with(&[project(1, "a", ProjectStatus::InProgress)]).await;
        session.gateway().fail(502);
        session.open_detail(1);

        session.pick_up(1).unwrap();
        let outcome = session
            .drop_on(Some(DropTarget::Column("complete".into())))
            .await;

        assert_eq!(outcome, DropOutcome::Settled(Settled::RolledBack));
        assert_eq!(session.store().status_of(1), Some(ProjectStatus::InProgress));
        assert_eq!(
            session.store().detail().unwrap().status,
            ProjectStatus::InProgress
        );
        let notice = session.notices_mut().pop().unwrap();
        assert!(notice.message.contains("In Progress"));
    }
}
