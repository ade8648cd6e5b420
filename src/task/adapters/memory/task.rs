//! In-memory repository for task lifecycle tests and embedding.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::{
    task::{
        domain::{Task, TaskId},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
    team::domain::TeamId,
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    team_index: HashMap<TeamId, BTreeSet<TaskKey>>,
}

/// Index key ordering tasks by creation time, then identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TaskKey {
    created_at: chrono::DateTime<chrono::Utc>,
    id: uuid::Uuid,
}

impl TaskKey {
    fn of(task: &Task) -> Self {
        Self {
            created_at: task.created_at(),
            id: task.id().into_inner(),
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Removes a task key from the team index, cleaning up the entry if empty.
fn unindex(state: &mut InMemoryTaskState, task: &Task) {
    if let Some(keys) = state.team_index.get_mut(&task.team()) {
        keys.remove(&TaskKey::of(task));
        if keys.is_empty() {
            state.team_index.remove(&task.team());
        }
    }
}

/// Refuses a write whose version does not follow the stored one.
fn check_version(stored: &Task, task: &Task) -> TaskRepositoryResult<()> {
    if stored == task || stored.version().checked_add(1) == Some(task.version()) {
        return Ok(());
    }
    Err(TaskRepositoryError::Conflict {
        task_id: task.id(),
        stored: stored.version(),
        attempted: task.version(),
    })
}

fn collect(state: &InMemoryTaskState, keys: impl Iterator<Item = TaskKey>) -> Vec<Task> {
    keys.filter_map(|key| state.tasks.get(&TaskId::from_uuid(key.id)).cloned())
        .collect()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if let Some(stored) = state.tasks.get(&task.id()) {
            check_version(stored, task)?;
        }
        if let Some(previous) = state.tasks.remove(&task.id()) {
            unindex(&mut state, &previous);
        }
        state
            .team_index
            .entry(task.team())
            .or_default()
            .insert(TaskKey::of(task));
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_team(&self, team_id: TeamId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let keys = state
            .team_index
            .get(&team_id)
            .map(|keys| keys.iter().copied().collect::<Vec<_>>())
            .unwrap_or_default();
        Ok(collect(&state, keys.into_iter()))
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let mut keys: Vec<TaskKey> = state.tasks.values().map(TaskKey::of).collect();
        keys.sort_unstable();
        Ok(collect(&state, keys.into_iter()))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let removed = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        unindex(&mut state, &removed);
        Ok(())
    }
}
