//! In-memory integration tests for concurrent requests against one store.
//!
//! A gated repository holds the first readers or writers at a barrier so the
//! interleaving under test happens on every run.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use mockable::DefaultClock;
use super::helpers::{minutes_after_epoch, stored_task};
use teamtasks::{
    rejection::RejectionKind,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Task, TaskId, TaskPriority, TaskStatus, TaskUpdate},
        ports::{TaskRepository, TaskRepositoryResult},
        services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
    },
    team::{
        adapters::memory::InMemoryTeamRepository,
        domain::TeamId,
        services::{CreateTeamRequest, TeamService},
    },
    user::{adapters::memory::InMemoryUserRepository, domain::User, ports::UserRepository},
};
use tokio::sync::Barrier;

/// Barrier that only stops the first `parties` callers.
struct Gate {
    barrier: Barrier,
    remaining: AtomicUsize,
}

impl Gate {
    fn new(parties: usize) -> Arc<Self> {
        Arc::new(Self {
            barrier: Barrier::new(parties),
            remaining: AtomicUsize::new(parties),
        })
    }

    async fn pass(&self) {
        let admitted = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if admitted {
            self.barrier.wait().await;
        }
    }
}

/// Task store that can hold callers of selected operations at a [`Gate`].
#[derive(Default)]
struct GatedTasks {
    inner: InMemoryTaskRepository,
    on_find_by_id: Option<Arc<Gate>>,
    on_find_by_team: Option<Arc<Gate>>,
    on_save: Option<Arc<Gate>>,
}

async fn pass(gate: Option<&Arc<Gate>>) {
    if let Some(gate) = gate {
        gate.pass().await;
    }
}

#[async_trait]
impl TaskRepository for GatedTasks {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        pass(self.on_save.as_ref()).await;
        self.inner.save(task).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let found = self.inner.find_by_id(id).await;
        pass(self.on_find_by_id.as_ref()).await;
        found
    }

    async fn find_by_team(&self, team_id: TeamId) -> TaskRepositoryResult<Vec<Task>> {
        let found = self.inner.find_by_team(team_id).await;
        pass(self.on_find_by_team.as_ref()).await;
        found
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list_all().await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.inner.delete(id).await
    }
}

type GatedTaskService =
    TaskLifecycleService<GatedTasks, InMemoryTeamRepository, InMemoryUserRepository, DefaultClock>;
type GatedTeamService =
    TeamService<InMemoryTeamRepository, GatedTasks, InMemoryUserRepository, DefaultClock>;

async fn services(tasks: GatedTasks) -> (GatedTaskService, GatedTeamService, User) {
    let tasks = Arc::new(tasks);
    let teams = Arc::new(InMemoryTeamRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let clock = Arc::new(DefaultClock);
    let owner = User::new("Ada").expect("valid user");
    users.store(&owner).await.expect("store owner");

    (
        TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&teams),
            Arc::clone(&users),
            Arc::clone(&clock),
        ),
        TeamService::new(teams, tasks, users, clock),
        owner,
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn interleaved_updates_never_reopen_a_completed_task() {
    // Both requests load the in-progress task before either one writes.
    let gated = GatedTasks {
        on_find_by_id: Some(Gate::new(2)),
        ..GatedTasks::default()
    };
    let task = stored_task(TeamId::new(), TaskStatus::InProgress, minutes_after_epoch(0));
    gated.inner.save(&task).await.expect("seed task");
    let (tasks, _, _) = services(gated).await;

    let (complete, edit) = tokio::join!(
        tasks.transition_task(task.id(), TaskStatus::Completed),
        tasks.update_task(task.id(), TaskUpdate::new().with_priority(TaskPriority::High)),
    );

    assert!(
        complete.is_ok() != edit.is_ok(),
        "exactly one writer may win: complete={complete:?} edit={edit:?}"
    );
    let refused = complete.as_ref().err().or(edit.as_ref().err());
    assert_eq!(
        refused.and_then(TaskLifecycleError::rejection),
        Some(RejectionKind::Conflict)
    );
    let stored = tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    let accepted = complete.ok().or(edit.ok()).expect("one writer succeeded");
    assert_eq!(stored, accepted);
}

#[tokio::test(flavor = "multi_thread")]
async fn team_deletion_racing_task_creation_leaves_no_orphan() {
    // The deletion guard's read and the task save meet at the gate: the
    // guard sees no tasks while the creation has already resolved the team.
    let gate = Gate::new(2);
    let (tasks, teams, owner) = services(GatedTasks {
        on_find_by_team: Some(Arc::clone(&gate)),
        on_save: Some(gate),
        ..GatedTasks::default()
    })
    .await;
    let team = teams
        .create_team(CreateTeamRequest::new("Transient", owner.id()))
        .await
        .expect("team creation should succeed");

    let (deleted, created) = tokio::join!(
        teams.delete_team(team.id()),
        tasks.create_task(CreateTaskRequest::new(team.id(), owner.id(), "Late work")),
    );

    assert!(
        !(deleted.is_ok() && created.is_ok()),
        "deletion and creation cannot both succeed: {deleted:?} {created:?}"
    );
    let team_exists = teams
        .find_by_id(team.id())
        .await
        .expect("lookup should succeed")
        .is_some();
    let active = tasks
        .list_by_team(team.id())
        .await
        .expect("listing should succeed")
        .into_iter()
        .filter(Task::is_active)
        .count();
    assert!(
        team_exists || active == 0,
        "team deleted while {active} active task(s) still reference it"
    );
    if created.is_ok() {
        assert!(team_exists, "created task must keep its team");
    }
}
