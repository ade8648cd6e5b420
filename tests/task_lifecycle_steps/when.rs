//! When steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use crate::test_helpers::run_async;
use rstest_bdd_macros::when;
use teamtasks::task::domain::{TaskPriority, TaskStatus, TaskUpdate};

fn apply(world: &mut TaskLifecycleWorld, update: TaskUpdate) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let result = run_async(world.workspace.tasks.update_task(task_id, update));
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_update = Some(result);
    Ok(())
}

#[when(r#"the task status is set to "{status}""#)]
fn set_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())?;
    apply(world, TaskUpdate::status(target))
}

#[when(r#"the task priority is set to "{priority}""#)]
fn set_priority(world: &mut TaskLifecycleWorld, priority: String) -> Result<(), eyre::Report> {
    let priority = TaskPriority::try_from(priority.as_str())?;
    apply(world, TaskUpdate::new().with_priority(priority))
}

#[when(r#"the task is updated with status "{status}" and priority "{priority}""#)]
fn set_status_and_priority(
    world: &mut TaskLifecycleWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let update = TaskUpdate::status(TaskStatus::try_from(status.as_str())?)
        .with_priority(TaskPriority::try_from(priority.as_str())?);
    apply(world, update)
}
