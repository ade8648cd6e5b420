//! Partial task updates.

use super::{TaskPriority, TaskStatus};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partial update of a task's editable fields.
///
/// An absent field leaves the task unchanged. For optional fields the outer
/// `Option` records presence and the inner one the new value, so
/// `Some(None)` clears the field; in JSON that is an explicit `null`.
///
/// The owning team, the creator, and the identifier are not editable and have
/// no counterpart here. Unknown keys are ignored when deserialising.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description; `Some(None)` clears it.
    #[serde(
        default,
        deserialize_with = "crate::presence::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    /// Requested status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// New due date; `Some(None)` clears it.
    #[serde(
        default,
        deserialize_with = "crate::presence::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// New assignee; `Some(None)` unassigns the task.
    #[serde(
        default,
        deserialize_with = "crate::presence::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_to: Option<Option<UserId>>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an update that only requests a status change.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self::new().with_status(status)
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Requests a status change.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Assigns the task to a user.
    #[must_use]
    pub const fn assign_to(mut self, user: UserId) -> Self {
        self.assigned_to = Some(Some(user));
        self
    }

    /// Removes the assignee.
    #[must_use]
    pub const fn unassign(mut self) -> Self {
        self.assigned_to = Some(None);
        self
    }

    /// Returns the assignee introduced by this update, if any.
    #[must_use]
    pub fn new_assignee(&self) -> Option<UserId> {
        self.assigned_to.flatten()
    }

    /// Returns `true` when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.assigned_to.is_none()
    }
}
