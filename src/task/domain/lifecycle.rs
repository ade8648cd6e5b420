//! Edit-lock and status-transition decisions for a single task.

use super::{TASK_WORKFLOW, Task, TaskDomainError, TaskRules, TaskUpdate, TransitionTable};
use mockable::Clock;

/// Decides whether a proposed update to a task is admissible.
///
/// The decision is pure: the input task is never modified, and an accepted
/// update yields a new task value for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLifecycle {
    workflow: TransitionTable,
    rules: TaskRules,
}

impl Default for TaskLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskLifecycle {
    /// Creates a lifecycle over [`TASK_WORKFLOW`] with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(TaskRules::default())
    }

    /// Creates a lifecycle over [`TASK_WORKFLOW`] with custom rules.
    #[must_use]
    pub const fn with_rules(rules: TaskRules) -> Self {
        Self {
            workflow: TASK_WORKFLOW,
            rules,
        }
    }

    /// Returns the field validation rules.
    #[must_use]
    pub const fn rules(&self) -> &TaskRules {
        &self.rules
    }

    /// Validates `update` against `task` and returns the updated task.
    ///
    /// Checks run in order:
    ///
    /// 1. A task in a terminal status rejects every update, empty or not.
    /// 2. A status that differs from the current one must be reachable in a
    ///    single step. Repeating the current status is not a transition.
    /// 3. A supplied title must satisfy the configured rules.
    ///
    /// Only fields present in `update` change. `updated_at` is refreshed on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EditLocked`],
    /// [`TaskDomainError::InvalidTransition`], or a title validation error.
    pub fn apply_update(
        &self,
        task: &Task,
        update: &TaskUpdate,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        let current = task.status();
        if self.workflow.is_terminal(current) {
            return Err(TaskDomainError::EditLocked {
                task_id: task.id(),
                status: current,
            });
        }

        let requested = update.status.filter(|status| *status != current);
        if let Some(target) = requested {
            if !self.workflow.permits(current, target) {
                return Err(TaskDomainError::InvalidTransition {
                    task_id: task.id(),
                    from: current,
                    to: target,
                });
            }
        }

        let title = update
            .title
            .as_deref()
            .map(|raw| self.rules.normalize_title(raw))
            .transpose()?;

        let mut next = task.clone();
        if let Some(validated) = title {
            next.set_title(validated);
        }
        if let Some(description) = update.description.clone() {
            next.set_description(description);
        }
        if let Some(target) = requested {
            next.set_status(target);
        }
        if let Some(priority) = update.priority {
            next.set_priority(priority);
        }
        if let Some(due_date) = update.due_date {
            next.set_due_date(due_date);
        }
        if let Some(assigned_to) = update.assigned_to {
            next.set_assigned_to(assigned_to);
        }
        next.touch(clock);
        Ok(next)
    }
}
