//! Four-column board view derived from the project listing.
//!
//! A [`Board`] borrows the listing and holds no state of its own; rebuild it
//! whenever the store changes.

use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;

use crate::model::Project;

/// One status bucket.
#[derive(Debug)]
pub struct Column<'a> {
    pub status: ProjectStatus,
    pub projects: Vec<&'a Project>,
}

impl Column<'_> {
    /// Drop-target id of this column (the status wire value).
    pub fn id(&self) -> &'static str {
        self.status.as_str()
    }

    pub fn title(&self) -> &'static str {
        self.status.label()
    }

    pub fn contains(&self, project_id: DbId) -> bool {
        self.projects.iter().any(|p| p.id == project_id)
    }
}

#[derive(Debug)]
pub struct Board<'a> {
    columns: [Column<'a>; 4],
}

impl<'a> Board<'a> {
    /// Split `projects` into one column per status, keeping collection order
    /// within each column.
    pub fn partition(projects: &'a [Project]) -> Self {
        let mut columns = ProjectStatus::ALL.map(|status| Column {
            status,
            projects: Vec::new(),
        });
        for project in projects {
            columns[project.status.index()].projects.push(project);
        }
        Self { columns }
    }

    /// Columns in board order: To Do, In Progress, Complete, Obsolete.
    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    pub fn column(&self, status: ProjectStatus) -> &Column<'a> {
        &self.columns[status.index()]
    }
}
