//! Error types for team domain validation.

use super::TeamId;
use crate::{rejection::RejectionKind, task::domain::TaskId};
use thiserror::Error;

/// Errors returned while constructing, editing, or deleting teams.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamDomainError {
    /// The team name is empty after trimming.
    #[error("team name must not be empty")]
    EmptyTeamName,

    /// The team still owns tasks that are pending or in progress.
    #[error("team {team_id} has {} active task(s)", .blocking.len())]
    HasActiveTasks {
        /// Team whose deletion was refused.
        team_id: TeamId,
        /// Tasks that block deletion.
        blocking: Vec<TaskId>,
    },
}

impl TeamDomainError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn rejection(&self) -> RejectionKind {
        match self {
            Self::EmptyTeamName => RejectionKind::InvalidInput,
            Self::HasActiveTasks { .. } => RejectionKind::HasActiveTasks,
        }
    }
}
