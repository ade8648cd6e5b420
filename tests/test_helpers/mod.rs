//! Shared workspace wiring for integration and behaviour tests.

use std::sync::Arc;

use mockable::DefaultClock;
use teamtasks::{
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Task, TaskStatus},
        services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
    },
    team::{
        adapters::memory::InMemoryTeamRepository,
        domain::Team,
        services::{CreateTeamRequest, TeamService},
    },
    user::{adapters::memory::InMemoryUserRepository, domain::User, ports::UserRepository},
};

/// Task service wired to in-memory adapters.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryTeamRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

/// Team service wired to in-memory adapters.
pub type TestTeamService = TeamService<
    InMemoryTeamRepository,
    InMemoryTaskRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

/// Both services sharing one set of in-memory repositories.
pub struct Workspace {
    pub users: Arc<InMemoryUserRepository>,
    pub tasks: TestTaskService,
    pub teams: TestTeamService,
}

impl Workspace {
    /// Creates a workspace with empty repositories.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let teams = Arc::new(InMemoryTeamRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
            tasks: TaskLifecycleService::new(
                Arc::clone(&tasks),
                Arc::clone(&teams),
                Arc::clone(&users),
                Arc::clone(&clock),
            ),
            teams: TeamService::new(teams, tasks, Arc::clone(&users), clock),
            users,
        }
    }

    /// Registers a user and a team owned by that user.
    ///
    /// # Errors
    ///
    /// Returns an error when the user or team cannot be created.
    pub async fn team_owned_by(&self, team: &str, owner: &str) -> eyre::Result<(Team, User)> {
        let user = User::new(owner)?;
        self.users.store(&user).await?;
        let created = self
            .teams
            .create_team(CreateTeamRequest::new(team, user.id()))
            .await?;
        Ok((created, user))
    }

    /// Creates a task and walks it through the workflow to `status`.
    ///
    /// # Errors
    ///
    /// Returns an error when creation or any intermediate transition fails.
    pub async fn task_in_status(
        &self,
        team: &Team,
        title: &str,
        status: TaskStatus,
    ) -> Result<Task, TaskLifecycleError> {
        let mut task = self
            .tasks
            .create_task(CreateTaskRequest::new(team.id(), team.owner(), title))
            .await?;
        for &step in path_to(status) {
            task = self.tasks.transition_task(task.id(), step).await?;
        }
        Ok(task)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Statuses to pass through, after creation, to reach `status`.
#[must_use]
pub const fn path_to(status: TaskStatus) -> &'static [TaskStatus] {
    match status {
        TaskStatus::Pending => &[],
        TaskStatus::InProgress => &[TaskStatus::InProgress],
        TaskStatus::Completed => &[TaskStatus::InProgress, TaskStatus::Completed],
        TaskStatus::Cancelled => &[TaskStatus::Cancelled],
    }
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
