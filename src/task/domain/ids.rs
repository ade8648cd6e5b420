//! Identifier type for the task domain.

crate::ids::uuid_id!(
    /// Unique identifier for a task.
    TaskId,
    "task"
);
