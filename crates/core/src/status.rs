//! Project workflow status.
//!
//! The board knows exactly four statuses. Transitions between them are
//! unconstrained: any status may follow any other, the caller decides.
//! The wire and storage representation is the lowercase value returned by
//! [`ProjectStatus::as_str`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Todo,
    #[serde(rename = "inprogress")]
    InProgress,
    Complete,
    Obsolete,
}

/// Status assigned to every newly created project.
pub const DEFAULT_STATUS: ProjectStatus = ProjectStatus::Todo;

impl ProjectStatus {
    /// All statuses in board column order.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Todo,
        ProjectStatus::InProgress,
        ProjectStatus::Complete,
        ProjectStatus::Obsolete,
    ];

    /// Wire / storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Todo => "todo",
            ProjectStatus::InProgress => "inprogress",
            ProjectStatus::Complete => "complete",
            ProjectStatus::Obsolete => "obsolete",
        }
    }

    /// Human-readable column title.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Todo => "To Do",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Complete => "Complete",
            ProjectStatus::Obsolete => "Obsolete",
        }
    }

    /// Position of this status in [`ProjectStatus::ALL`].
    pub fn index(self) -> usize {
        match self {
            ProjectStatus::Todo => 0,
            ProjectStatus::InProgress => 1,
            ProjectStatus::Complete => 2,
            ProjectStatus::Obsolete => 3,
        }
    }

    /// Parse a wire value, returning `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid status '{s}'. Must be one of: todo, inprogress, complete, obsolete"
            ))
        })
    }
}

/// Lets `sqlx` decode the TEXT column via `#[sqlx(try_from = "String")]`.
impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
