//! Domain model for task lifecycle management.
//!
//! Tasks move through a fixed status graph declared as data in
//! [`TASK_WORKFLOW`]. All decisions here are pure: nothing in the domain
//! performs I/O, and every rejection is a typed [`TaskDomainError`].

mod error;
mod ids;
mod lifecycle;
mod priority;
mod rules;
mod status;
mod task;
mod update;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use lifecycle::TaskLifecycle;
pub use priority::TaskPriority;
pub use rules::TaskRules;
pub use status::{TASK_WORKFLOW, TaskStatus, TransitionTable};
pub use task::{Comment, NewTask, PersistedTaskData, Task};
pub use update::TaskUpdate;
