//! Local, single-owner copy of the caller's projects.
//!
//! The store keeps the listing shown on the board plus an optional open
//! detail view of one project. Both copies change only through the methods
//! below, and every status write goes to both.

use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;

use crate::model::Project;

#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    detail: Option<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole listing. An open detail view is refreshed from the
    /// new listing, or closed when its project is gone.
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        if let Some(open) = self.detail.take() {
            self.detail = self.get(open.id).cloned();
        }
    }

    /// Add a project, or replace the one with the same id.
    pub fn insert(&mut self, project: Project) {
        match self.position(project.id) {
            Some(index) => self.projects[index] = project,
            None => self.projects.push(project),
        }
    }

    /// Merge an authoritative record into the listing and the open detail
    /// view. Returns `false` when the project is no longer held locally.
    pub fn apply_canonical(&mut self, project: Project) -> bool {
        let Some(index) = self.position(project.id) else {
            return false;
        };
        if let Some(detail) = self.detail.as_mut().filter(|d| d.id == project.id) {
            *detail = project.clone();
        }
        self.projects[index] = project;
        true
    }

    /// Overwrite a project's status, returning the previous listing status.
    pub fn set_status(&mut self, id: DbId, status: ProjectStatus) -> Option<ProjectStatus> {
        let index = self.position(id)?;
        let previous = std::mem::replace(&mut self.projects[index].status, status);
        if let Some(detail) = self.detail_mut(id) {
            detail.status = status;
        }
        Some(previous)
    }

    /// Set `status` only where the current value is still `expected`.
    ///
    /// Listing and detail view are checked independently. Returns whether
    /// the listing was rewritten.
    pub fn restore_status(
        &mut self,
        id: DbId,
        expected: ProjectStatus,
        status: ProjectStatus,
    ) -> bool {
        if let Some(detail) = self.detail_mut(id).filter(|d| d.status == expected) {
            detail.status = status;
        }
        match self.position(id) {
            Some(index) if self.projects[index].status == expected => {
                self.projects[index].status = status;
                true
            }
            _ => false,
        }
    }

    /// Remove a project, closing its detail view if open.
    pub fn remove(&mut self, id: DbId) -> Option<Project> {
        let index = self.position(id)?;
        if self.detail.as_ref().is_some_and(|d| d.id == id) {
            self.detail = None;
        }
        Some(self.projects.remove(index))
    }

    pub fn get(&self, id: DbId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn status_of(&self, id: DbId) -> Option<ProjectStatus> {
        self.get(id).map(|p| p.status)
    }

    /// The listing, in collection order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    // --- Detail view ---

    /// Open the detail view on a held project.
    pub fn open_detail(&mut self, id: DbId) -> bool {
        self.detail = self.get(id).cloned();
        self.detail.is_some()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&Project> {
        self.detail.as_ref()
    }

    fn detail_mut(&mut self, id: DbId) -> Option<&mut Project> {
        self.detail.as_mut().filter(|d| d.id == id)
    }

    fn position(&self, id: DbId) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }
}
