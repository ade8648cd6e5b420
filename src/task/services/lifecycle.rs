//! Service layer for task creation, editing, and status transitions.

use crate::{
    rejection::{EntityRef, RejectionKind},
    task::{
        domain::{
            NewTask, Task, TaskDomainError, TaskId, TaskLifecycle, TaskPriority, TaskRules,
            TaskStatus, TaskUpdate,
        },
        ports::{TaskRepository, TaskRepositoryError},
    },
    team::{
        domain::TeamId,
        ports::{TeamRepository, TeamRepositoryError},
    },
    user::{
        domain::UserId,
        ports::{UserRepository, UserRepositoryError},
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
///
/// The initial status is always pending; the payload has no status field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    team: TeamId,
    created_by: UserId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    priority: TaskPriority,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    assigned_to: Option<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(team: TeamId, created_by: UserId, title: impl Into<String>) -> Self {
        Self {
            team,
            created_by,
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            due_date: None,
            assigned_to: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the task assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assigned_to = Some(assignee);
        self
    }

    fn into_new_task(self) -> NewTask {
        NewTask {
            team: self.team,
            created_by: self.created_by,
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
            assigned_to: self.assigned_to,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or a lifecycle rule rejected the request.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Team lookup failed.
    #[error(transparent)]
    TeamLookup(#[from] TeamRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    UserLookup(#[from] UserRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// The request references a team or user that does not exist.
    #[error("dangling reference to {0}")]
    DanglingReference(EntityRef),
}

impl TaskLifecycleError {
    /// Classifies the error for callers.
    ///
    /// Returns `None` for infrastructure failures, which are not rejections.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::Domain(err) => Some(err.rejection()),
            Self::Repository(err) => err.rejection(),
            Self::TeamLookup(err) => err.rejection(),
            Self::UserLookup(err) => err.rejection(),
            Self::NotFound(_) => Some(RejectionKind::NotFound),
            Self::DanglingReference(_) => Some(RejectionKind::DanglingReference),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Loads current state through the injected repositories, asks
/// [`TaskLifecycle`] for a decision, and persists accepted results.
#[derive(Clone)]
pub struct TaskLifecycleService<Tasks, Teams, Users, C>
where
    Tasks: TaskRepository,
    Teams: TeamRepository,
    Users: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<Tasks>,
    teams: Arc<Teams>,
    users: Arc<Users>,
    clock: Arc<C>,
    lifecycle: TaskLifecycle,
}

impl<Tasks, Teams, Users, C> TaskLifecycleService<Tasks, Teams, Users, C>
where
    Tasks: TaskRepository,
    Teams: TeamRepository,
    Users: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default rules.
    #[must_use]
    pub fn new(tasks: Arc<Tasks>, teams: Arc<Teams>, users: Arc<Users>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            teams,
            users,
            clock,
            lifecycle: TaskLifecycle::new(),
        }
    }

    /// Replaces the field validation rules.
    #[must_use]
    pub fn with_rules(mut self, rules: TaskRules) -> Self {
        self.lifecycle = TaskLifecycle::with_rules(rules);
        self
    }

    /// Creates a pending task after resolving its team, creator, and
    /// assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::DanglingReference`] when a referenced
    /// team or user does not exist, domain errors for invalid fields, or
    /// persistence errors.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        self.ensure_team_exists(request.team).await?;
        self.ensure_user_exists(request.created_by).await?;
        if let Some(assignee) = request.assigned_to {
            self.ensure_user_exists(assignee).await?;
        }

        let task = Task::new(
            request.into_new_task(),
            self.lifecycle.rules(),
            &*self.clock,
        )?;
        self.tasks.save(&task).await?;
        // A team deletion whose guard ran before this save must not leave the
        // task behind without its team.
        if self.teams.find_by_id(task.team()).await?.is_none() {
            self.tasks.delete(task.id()).await?;
            warn!(
                task_id = %task.id(),
                team_id = %task.team(),
                "team deleted while task was being created"
            );
            return Err(TaskLifecycleError::DanglingReference(task.team().into()));
        }
        info!(task_id = %task.id(), team_id = %task.team(), "task created");
        Ok(task)
    }

    /// Applies a partial update to a task.
    ///
    /// Lifecycle rules are consulted before the new assignee, if any, is
    /// resolved, so a locked task reports the lock whatever the update holds.
    /// An empty update that passes those rules returns the stored task
    /// without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskDomainError::EditLocked`] or
    /// [`TaskDomainError::InvalidTransition`] when lifecycle rules reject the
    /// update, [`TaskLifecycleError::DanglingReference`] for an unknown
    /// assignee, [`TaskRepositoryError::Conflict`] when the task changed
    /// after it was loaded, or persistence errors.
    pub async fn update_task(
        &self,
        task_id: TaskId,
        update: TaskUpdate,
    ) -> TaskLifecycleResult<Task> {
        let current = self.find_task_or_error(task_id).await?;
        let updated = self
            .lifecycle
            .apply_update(&current, &update, &*self.clock)
            .inspect_err(|err| {
                warn!(task_id = %task_id, status = %current.status(), error = %err, "task update rejected");
            })?;
        if update.is_empty() {
            debug!(task_id = %task_id, "empty update, nothing to write");
            return Ok(current);
        }
        if let Some(assignee) = update.new_assignee() {
            self.ensure_user_exists(assignee).await?;
        }

        self.tasks.save(&updated).await.inspect_err(|err| {
            warn!(task_id = %task_id, error = %err, "task write refused");
        })?;
        if updated.status() == current.status() {
            info!(task_id = %task_id, "task updated");
        } else {
            info!(
                task_id = %task_id,
                from = %current.status(),
                to = %updated.status(),
                "task status changed"
            );
        }
        Ok(updated)
    }

    /// Moves a task to another status without touching other fields.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update_task`].
    pub async fn transition_task(
        &self,
        task_id: TaskId,
        target: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        self.update_task(task_id, TaskUpdate::status(target)).await
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        debug!(task_id = %task_id, "looking up task");
        Ok(self.tasks.find_by_id(task_id).await?)
    }

    /// Lists every task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns persistence errors from the repository.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list_all().await?)
    }

    /// Lists the tasks of a team, oldest first.
    ///
    /// # Errors
    ///
    /// Returns persistence errors from the repository.
    pub async fn list_by_team(&self, team_id: TeamId) -> TaskLifecycleResult<Vec<Task>> {
        debug!(team_id = %team_id, "listing team tasks");
        Ok(self.tasks.find_by_team(team_id).await?)
    }

    /// Deletes a task regardless of its status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or persistence errors.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        self.tasks.delete(task_id).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(id) => TaskLifecycleError::NotFound(id),
            other => other.into(),
        })?;
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    async fn ensure_team_exists(&self, team_id: TeamId) -> TaskLifecycleResult<()> {
        if self.teams.find_by_id(team_id).await?.is_none() {
            return Err(TaskLifecycleError::DanglingReference(team_id.into()));
        }
        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: UserId) -> TaskLifecycleResult<()> {
        if !self.users.exists(user_id).await? {
            return Err(TaskLifecycleError::DanglingReference(user_id.into()));
        }
        Ok(())
    }
}
