//! Deletion guard for teams that still own in-flight work.

use super::{Team, TeamDomainError};
use crate::task::domain::Task;

/// Decides whether a team may be deleted given the tasks that reference it.
///
/// Pending and in-progress tasks block deletion. Completed and cancelled
/// tasks are history and never block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamDeletionGuard;

impl TeamDeletionGuard {
    /// Creates a deletion guard.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks whether `team` may be deleted.
    ///
    /// Tasks that belong to a different team are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::HasActiveTasks`] listing every active task
    /// of the team, in the order given.
    pub fn can_delete<'a>(
        &self,
        team: &Team,
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> Result<(), TeamDomainError> {
        let blocking: Vec<_> = tasks
            .into_iter()
            .filter(|task| task.team() == team.id() && task.is_active())
            .map(Task::id)
            .collect();

        if blocking.is_empty() {
            Ok(())
        } else {
            Err(TeamDomainError::HasActiveTasks {
                team_id: team.id(),
                blocking,
            })
        }
    }
}
