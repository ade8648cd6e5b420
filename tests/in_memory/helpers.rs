//! Fixtures shared by in-memory repository tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use teamtasks::{
    task::domain::{PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus},
    team::domain::{PersistedTeamData, Team, TeamId},
    user::domain::UserId,
};

/// Fixed reference instant used to build ordered timestamps.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Returns an instant `minutes` after [`epoch`].
pub fn minutes_after_epoch(minutes: i64) -> DateTime<Utc> {
    epoch() + Duration::minutes(minutes)
}

/// Builds a stored task with explicit team, status, and creation time.
pub fn stored_task(team: TeamId, status: TaskStatus, created_at: DateTime<Utc>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        team,
        created_by: UserId::new(),
        title: format!("task created at {created_at}"),
        description: None,
        status,
        priority: TaskPriority::default(),
        due_date: None,
        assigned_to: None,
        comments: Vec::new(),
        created_at,
        updated_at: created_at,
        version: 1,
    })
}

/// Builds a stored team with an explicit name and creation time.
pub fn stored_team(name: &str, created_at: DateTime<Utc>) -> Team {
    Team::from_persisted(PersistedTeamData {
        id: TeamId::new(),
        name: name.to_owned(),
        description: None,
        owner: UserId::new(),
        created_at,
        updated_at: created_at,
    })
}
