//! Task status and the transition graph between statuses.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Completed,
    /// Task has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the statuses reachable from this one in a single step.
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [Self] {
        TASK_WORKFLOW.allowed_from(self)
    }

    /// Returns `true` when `target` is reachable from this status in a
    /// single step. A status is never reachable from itself.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        TASK_WORKFLOW.permits(self, target)
    }

    /// Returns `true` for statuses with no outgoing transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        TASK_WORKFLOW.is_terminal(self)
    }

    /// Returns `true` for statuses that still represent in-flight work.
    #[must_use]
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Immutable mapping from a status to the statuses it may move to.
///
/// Statuses missing from the table have no outgoing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTable {
    edges: &'static [(TaskStatus, &'static [TaskStatus])],
}

impl TransitionTable {
    /// Creates a table from `(from, allowed targets)` rows.
    #[must_use]
    pub const fn new(edges: &'static [(TaskStatus, &'static [TaskStatus])]) -> Self {
        Self { edges }
    }

    /// Returns the targets reachable from `from`.
    #[must_use]
    pub fn allowed_from(&self, from: TaskStatus) -> &'static [TaskStatus] {
        self.edges
            .iter()
            .find_map(|&(status, targets)| (status == from).then_some(targets))
            .unwrap_or_default()
    }

    /// Returns `true` when the edge `from -> to` exists.
    #[must_use]
    pub fn permits(&self, from: TaskStatus, to: TaskStatus) -> bool {
        self.allowed_from(from).contains(&to)
    }

    /// Returns `true` when `status` has no outgoing edges.
    #[must_use]
    pub fn is_terminal(&self, status: TaskStatus) -> bool {
        self.allowed_from(status).is_empty()
    }
}

const FROM_PENDING: &[TaskStatus] = &[TaskStatus::InProgress, TaskStatus::Cancelled];
const FROM_IN_PROGRESS: &[TaskStatus] = &[TaskStatus::Completed, TaskStatus::Cancelled];
const TERMINAL: &[TaskStatus] = &[];

/// The task workflow: `pending -> {in_progress, cancelled}`,
/// `in_progress -> {completed, cancelled}`; `completed` and `cancelled` are
/// terminal.
pub const TASK_WORKFLOW: TransitionTable = TransitionTable::new(&[
    (TaskStatus::Pending, FROM_PENDING),
    (TaskStatus::InProgress, FROM_IN_PROGRESS),
    (TaskStatus::Completed, TERMINAL),
    (TaskStatus::Cancelled, TERMINAL),
]);
