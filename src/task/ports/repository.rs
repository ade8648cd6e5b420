//! Repository port for task persistence and lookup.

use crate::{
    rejection::RejectionKind,
    task::domain::{Task, TaskId},
    team::domain::TeamId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Writes are checked against [`Task::version`] so that a read, decide, write
/// sequence never overwrites a change it did not see.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts the task, or replaces the stored task with the same ID.
    ///
    /// A replacement must carry the stored version plus one, which is what
    /// an accepted update of the stored task produces. Saving a value equal
    /// to the stored one is a no-op, so retrying a save is safe.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Conflict`] when the stored task has
    /// moved on since `task` was read.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task that belongs to the given team.
    async fn find_by_team(&self, team_id: TeamId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every stored task.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored task changed after the saved value was read.
    #[error("task {task_id} was modified concurrently (stored version {stored}, attempted {attempted})")]
    Conflict {
        /// Task whose write was refused.
        task_id: TaskId,
        /// Version currently stored.
        stored: u64,
        /// Version carried by the refused write.
        attempted: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error for callers.
    ///
    /// Returns `None` for persistence failures.
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::NotFound(_) => Some(RejectionKind::NotFound),
            Self::Conflict { .. } => Some(RejectionKind::Conflict),
            Self::Persistence(_) => None,
        }
    }
}
