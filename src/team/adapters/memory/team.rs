//! In-memory repository for teams.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::team::{
    domain::{Team, TeamId},
    ports::{TeamRepository, TeamRepositoryError, TeamRepositoryResult},
};

/// Thread-safe in-memory team repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<TeamId, Team>>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl ToString) -> TeamRepositoryError {
    TeamRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn store(&self, team: &Team) -> TeamRepositoryResult<()> {
        let mut teams = self.teams.write().map_err(|err| poisoned(&err))?;
        if teams.contains_key(&team.id()) {
            return Err(TeamRepositoryError::DuplicateTeam(team.id()));
        }
        teams.insert(team.id(), team.clone());
        Ok(())
    }

    async fn update(&self, team: &Team) -> TeamRepositoryResult<()> {
        let mut teams = self.teams.write().map_err(|err| poisoned(&err))?;
        let stored = teams
            .get_mut(&team.id())
            .ok_or(TeamRepositoryError::NotFound(team.id()))?;
        *stored = team.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TeamId) -> TeamRepositoryResult<Option<Team>> {
        let teams = self.teams.read().map_err(|err| poisoned(&err))?;
        Ok(teams.get(&id).cloned())
    }

    async fn list_all(&self) -> TeamRepositoryResult<Vec<Team>> {
        let teams = self.teams.read().map_err(|err| poisoned(&err))?;
        let mut all: Vec<Team> = teams.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().into_inner().cmp(&b.id().into_inner()))
        });
        Ok(all)
    }

    async fn delete(&self, id: TeamId) -> TeamRepositoryResult<()> {
        let mut teams = self.teams.write().map_err(|err| poisoned(&err))?;
        teams
            .remove(&id)
            .map(|_| ())
            .ok_or(TeamRepositoryError::NotFound(id))
    }
}
