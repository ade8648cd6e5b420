//! Typed rejection taxonomy shared by every service.
//!
//! Services never format user-facing text for callers to inspect. Each service
//! error reports a [`RejectionKind`] that transport layers switch on
//! exhaustively, for example to choose an HTTP status code.

use crate::{task::domain::TaskId, team::domain::TeamId, user::domain::UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a disallowed operation.
///
/// Infrastructure failures are not rejections; services report them as
/// `None` from their `rejection()` accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The addressed task or team does not exist.
    NotFound,
    /// A new or edited record references a team or user that does not exist.
    DanglingReference,
    /// The task is in a terminal status and can no longer be edited.
    EditLocked,
    /// The requested status is not reachable from the current status.
    InvalidTransition,
    /// The team still owns tasks that are pending or in progress.
    HasActiveTasks,
    /// Input failed field-level validation.
    InvalidInput,
    /// The record collides with one that already exists, or changed since the
    /// request read it.
    Conflict,
}

impl RejectionKind {
    /// Returns the canonical machine-readable representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::DanglingReference => "dangling_reference",
            Self::EditLocked => "edit_locked",
            Self::InvalidTransition => "invalid_transition",
            Self::HasActiveTasks => "has_active_tasks",
            Self::InvalidInput => "invalid_input",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an entity addressed by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "entity", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    /// A task.
    Task(TaskId),
    /// A team.
    Team(TeamId),
    /// A user.
    User(UserId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task {id}"),
            Self::Team(id) => write!(f, "team {id}"),
            Self::User(id) => write!(f, "user {id}"),
        }
    }
}

impl From<TaskId> for EntityRef {
    fn from(value: TaskId) -> Self {
        Self::Task(value)
    }
}

impl From<TeamId> for EntityRef {
    fn from(value: TeamId) -> Self {
        Self::Team(value)
    }
}

impl From<UserId> for EntityRef {
    fn from(value: UserId) -> Self {
        Self::User(value)
    }
}
