//! Repository port for team persistence.

use crate::{
    rejection::RejectionKind,
    team::domain::{Team, TeamId},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for team repository operations.
pub type TeamRepositoryResult<T> = Result<T, TeamRepositoryError>;

/// Team persistence contract.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Stores a new team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::DuplicateTeam`] when the team ID already
    /// exists.
    async fn store(&self, team: &Team) -> TeamRepositoryResult<()>;

    /// Persists changes to an existing team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::NotFound`] when the team does not exist.
    async fn update(&self, team: &Team) -> TeamRepositoryResult<()>;

    /// Finds a team by identifier.
    ///
    /// Returns `None` when the team does not exist.
    async fn find_by_id(&self, id: TeamId) -> TeamRepositoryResult<Option<Team>>;

    /// Returns every stored team.
    async fn list_all(&self) -> TeamRepositoryResult<Vec<Team>>;

    /// Removes a team. Tasks that reference it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::NotFound`] when the team does not exist.
    async fn delete(&self, id: TeamId) -> TeamRepositoryResult<()>;
}

/// Errors returned by team repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TeamRepositoryError {
    /// A team with the same identifier already exists.
    #[error("duplicate team identifier: {0}")]
    DuplicateTeam(TeamId),

    /// The team was not found.
    #[error("team not found: {0}")]
    NotFound(TeamId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TeamRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error for callers.
    ///
    /// Returns `None` for persistence failures.
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::DuplicateTeam(_) => Some(RejectionKind::Conflict),
            Self::NotFound(_) => Some(RejectionKind::NotFound),
            Self::Persistence(_) => None,
        }
    }
}
