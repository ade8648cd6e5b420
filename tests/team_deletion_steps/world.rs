//! Shared world state for team deletion BDD scenarios.

use crate::test_helpers::Workspace;
use rstest::fixture;
use teamtasks::{
    task::domain::Task,
    team::{domain::Team, services::TeamServiceError},
};

/// Scenario world for team deletion behaviour tests.
pub struct TeamDeletionWorld {
    pub workspace: Workspace,
    pub team: Option<Team>,
    pub tasks: Vec<Task>,
    pub deletion: Option<Result<(), TeamServiceError>>,
}

impl TeamDeletionWorld {
    /// Creates a world with empty repositories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            team: None,
            tasks: Vec::new(),
            deletion: None,
        }
    }

    /// Returns the team under test.
    pub fn team(&self) -> Result<&Team, eyre::Report> {
        self.team
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing team in scenario world"))
    }

    /// Returns the outcome of the deletion attempt.
    pub fn deletion(&self) -> Result<&Result<(), TeamServiceError>, eyre::Report> {
        self.deletion
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing deletion result in scenario world"))
    }
}

impl Default for TeamDeletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TeamDeletionWorld {
    TeamDeletionWorld::default()
}
