//! Service layer for team creation, editing, and guarded deletion.

use crate::{
    rejection::{EntityRef, RejectionKind},
    task::ports::{TaskRepository, TaskRepositoryError},
    team::{
        domain::{Team, TeamDeletionGuard, TeamDomainError, TeamId},
        ports::{TeamRepository, TeamRepositoryError},
    },
    user::{
        domain::UserId,
        ports::{UserRepository, UserRepositoryError},
    },
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a team.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTeamRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    owner: UserId,
}

impl CreateTeamRequest {
    /// Creates a request with required team fields.
    #[must_use]
    pub fn new(name: impl Into<String>, owner: UserId) -> Self {
        Self {
            name: name.into(),
            description: None,
            owner,
        }
    }

    /// Sets the team description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for editing a team. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTeamRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "crate::presence::present")]
    description: Option<Option<String>>,
}

impl UpdateTeamRequest {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new description.
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
}

/// Service-level errors for team operations.
#[derive(Debug, Error)]
pub enum TeamServiceError {
    /// Domain validation or the deletion guard rejected the request.
    #[error(transparent)]
    Domain(#[from] TeamDomainError),
    /// Team repository operation failed.
    #[error(transparent)]
    Repository(#[from] TeamRepositoryError),
    /// Task lookup failed.
    #[error(transparent)]
    TaskLookup(#[from] TaskRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    UserLookup(#[from] UserRepositoryError),
    /// No team exists with the given identifier.
    #[error("team {0} not found")]
    NotFound(TeamId),
    /// The request references a user that does not exist.
    #[error("dangling reference to {0}")]
    DanglingReference(EntityRef),
}

impl TeamServiceError {
    /// Classifies the error for callers.
    ///
    /// Returns `None` for infrastructure failures, which are not rejections.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::Domain(err) => Some(err.rejection()),
            Self::Repository(err) => err.rejection(),
            Self::TaskLookup(err) => err.rejection(),
            Self::UserLookup(err) => err.rejection(),
            Self::NotFound(_) => Some(RejectionKind::NotFound),
            Self::DanglingReference(_) => Some(RejectionKind::DanglingReference),
        }
    }
}

/// Result type for team service operations.
pub type TeamServiceResult<T> = Result<T, TeamServiceError>;

/// Team management service.
#[derive(Clone)]
pub struct TeamService<Teams, Tasks, Users, C>
where
    Teams: TeamRepository,
    Tasks: TaskRepository,
    Users: UserRepository,
    C: Clock + Send + Sync,
{
    teams: Arc<Teams>,
    tasks: Arc<Tasks>,
    users: Arc<Users>,
    clock: Arc<C>,
    guard: TeamDeletionGuard,
}

impl<Teams, Tasks, Users, C> TeamService<Teams, Tasks, Users, C>
where
    Teams: TeamRepository,
    Tasks: TaskRepository,
    Users: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new team service.
    #[must_use]
    pub const fn new(
        teams: Arc<Teams>,
        tasks: Arc<Tasks>,
        users: Arc<Users>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            teams,
            tasks,
            users,
            clock,
            guard: TeamDeletionGuard::new(),
        }
    }

    /// Creates a team after resolving its owner.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::DanglingReference`] when the owner does not
    /// exist, domain errors for invalid fields, or persistence errors.
    pub async fn create_team(&self, request: CreateTeamRequest) -> TeamServiceResult<Team> {
        if !self.users.exists(request.owner).await? {
            return Err(TeamServiceError::DanglingReference(request.owner.into()));
        }

        let team = Team::new(
            request.name,
            request.description,
            request.owner,
            &*self.clock,
        )?;
        self.teams.store(&team).await?;
        info!(team_id = %team.id(), owner = %team.owner(), "team created");
        Ok(team)
    }

    /// Edits a team's name and description.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::NotFound`] when the team does not exist,
    /// [`TeamDomainError::EmptyTeamName`] for a blank name, or persistence
    /// errors.
    pub async fn update_team(
        &self,
        team_id: TeamId,
        request: UpdateTeamRequest,
    ) -> TeamServiceResult<Team> {
        let mut team = self.find_team_or_error(team_id).await?;
        if let Some(name) = request.name {
            team.rename(name, &*self.clock)?;
        }
        if let Some(description) = request.description {
            team.describe(description, &*self.clock);
        }
        self.teams.update(&team).await?;
        info!(team_id = %team_id, "team updated");
        Ok(team)
    }

    /// Deletes a team once none of its tasks are active.
    ///
    /// Completed and cancelled tasks keep their reference to the deleted
    /// team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::NotFound`] when the team does not exist,
    /// [`TeamDomainError::HasActiveTasks`] when pending or in-progress tasks
    /// block deletion, or persistence errors.
    pub async fn delete_team(&self, team_id: TeamId) -> TeamServiceResult<()> {
        let team = self.find_team_or_error(team_id).await?;
        let tasks = self.tasks.find_by_team(team_id).await?;
        self.guard.can_delete(&team, &tasks).inspect_err(|err| {
            warn!(team_id = %team_id, error = %err, "team deletion rejected");
        })?;

        self.teams.delete(team_id).await.map_err(|err| match err {
            TeamRepositoryError::NotFound(id) => TeamServiceError::NotFound(id),
            other => other.into(),
        })?;

        // Tasks created after the guard ran block deletion as well; the team
        // comes back so they keep a valid reference.
        let late = self.tasks.find_by_team(team_id).await?;
        if let Err(err) = self.guard.can_delete(&team, &late) {
            self.teams.store(&team).await?;
            warn!(team_id = %team_id, error = %err, "team restored after concurrent task creation");
            return Err(err.into());
        }
        info!(team_id = %team_id, retained_tasks = late.len(), "team deleted");
        Ok(())
    }

    /// Finds a team by identifier.
    ///
    /// Returns `Ok(None)` when the team does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TeamServiceError::Repository`] when persistence lookup fails.
    pub async fn find_by_id(&self, team_id: TeamId) -> TeamServiceResult<Option<Team>> {
        debug!(team_id = %team_id, "looking up team");
        Ok(self.teams.find_by_id(team_id).await?)
    }

    /// Lists every team, oldest first.
    ///
    /// # Errors
    ///
    /// Returns persistence errors from the repository.
    pub async fn list_all(&self) -> TeamServiceResult<Vec<Team>> {
        Ok(self.teams.list_all().await?)
    }

    async fn find_team_or_error(&self, team_id: TeamId) -> TeamServiceResult<Team> {
        self.teams
            .find_by_id(team_id)
            .await?
            .ok_or(TeamServiceError::NotFound(team_id))
    }
}
