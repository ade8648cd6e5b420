//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use crate::rejection::RejectionKind;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or updating tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task title exceeds the configured limit.
    #[error("task title has {actual} characters, limit is {max}")]
    TaskTitleTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The due date lies before the creation instant.
    #[error("due date {due_date} is in the past")]
    DueDateInPast {
        /// Rejected due date.
        due_date: DateTime<Utc>,
    },

    /// The task is in a terminal status and cannot be edited.
    #[error("task {task_id} is {status} and can no longer be edited")]
    EditLocked {
        /// Locked task.
        task_id: TaskId,
        /// Terminal status the task is in.
        status: TaskStatus,
    },

    /// The requested status is not reachable from the current one.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}

impl TaskDomainError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn rejection(&self) -> RejectionKind {
        match self {
            Self::EmptyTaskTitle | Self::TaskTitleTooLong { .. } | Self::DueDateInPast { .. } => {
                RejectionKind::InvalidInput
            }
            Self::EditLocked { .. } => RejectionKind::EditLocked,
            Self::InvalidTransition { .. } => RejectionKind::InvalidTransition,
        }
    }
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
