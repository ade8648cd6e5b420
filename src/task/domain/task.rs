//! Task aggregate root and comment records.

use super::{TaskDomainError, TaskId, TaskPriority, TaskRules, TaskStatus, rules};
use crate::{team::domain::TeamId, user::domain::UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Comment attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    author: UserId,
    body: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment record.
    #[must_use]
    pub fn new(author: UserId, body: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            author,
            body: body.into(),
            created_at,
        }
    }

    /// Returns the comment author.
    #[must_use]
    pub const fn author(&self) -> UserId {
        self.author
    }

    /// Returns the comment text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns when the comment was written.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Parameter object for creating a task.
///
/// References are taken at face value here; resolving them against stored
/// teams and users is the service layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning team.
    pub team: TeamId,
    /// Creating user.
    pub created_by: UserId,
    /// Task title.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<UserId>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    team: TeamId,
    created_by: UserId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<UserId>,
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning team.
    pub team: TeamId,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted assignee.
    pub assigned_to: Option<UserId>,
    /// Persisted comments, oldest first.
    pub comments: Vec<Comment>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted row version.
    pub version: u64,
}

impl Task {
    /// Creates a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is blank or too long, or
    /// when the due date has already passed and `rules` forbid that.
    pub fn new(
        draft: NewTask,
        rules: &TaskRules,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let timestamp = clock.utc();
        let title = rules.normalize_title(&draft.title)?;
        rules.check_due_date(draft.due_date, timestamp)?;

        Ok(Self {
            id: TaskId::new(),
            team: draft.team,
            created_by: draft.created_by,
            title,
            description: rules::normalize_optional_text(draft.description),
            status: TaskStatus::Pending,
            priority: draft.priority,
            due_date: draft.due_date,
            assigned_to: draft.assigned_to,
            comments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
            version: 1,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            team: data.team,
            created_by: data.created_by,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            assigned_to: data.assigned_to,
            comments: data.comments,
            created_at: data.created_at,
            updated_at: data.updated_at,
            version: data.version,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning team.
    #[must_use]
    pub const fn team(&self) -> TeamId {
        self.team
    }

    /// Returns the user who created the task.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the comments, oldest first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the row version, starting at 1 and advanced by every accepted
    /// update.
    ///
    /// Repositories compare it with the stored version to detect a write
    /// based on a stale read.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` while the task is pending or in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub(super) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(super) fn set_description(&mut self, description: Option<String>) {
        self.description = rules::normalize_optional_text(description);
    }

    pub(super) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub(super) const fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    pub(super) const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    pub(super) const fn set_assigned_to(&mut self, assigned_to: Option<UserId>) {
        self.assigned_to = assigned_to;
    }

    /// Records a modification: refreshes `updated_at` and advances the
    /// version.
    pub(super) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.version = self.version.saturating_add(1);
    }
}
