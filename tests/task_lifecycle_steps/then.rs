//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use crate::test_helpers::run_async;
use rstest_bdd_macros::then;
use teamtasks::task::{
    domain::{Task, TaskDomainError, TaskPriority, TaskStatus},
    services::TaskLifecycleError,
};

fn stored_task(world: &TaskLifecycleWorld) -> Result<Task, eyre::Report> {
    let task_id = world.task()?.id();
    run_async(world.workspace.tasks.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {task_id} missing from store"))
}

#[then("the update is accepted")]
fn update_is_accepted(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_update()? {
        Ok(_) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected update to succeed, got {err}")),
    }
}

#[then(r#"the update is rejected as "{kind}""#)]
fn update_is_rejected_as(world: &TaskLifecycleWorld, kind: String) -> Result<(), eyre::Report> {
    let Err(err) = world.last_update()? else {
        return Err(eyre::eyre!("expected a rejection, update succeeded"));
    };
    let actual = err.rejection().map(|rejection| rejection.as_str());
    if actual != Some(kind.as_str()) {
        return Err(eyre::eyre!("expected {kind} rejection, got {err:?}"));
    }
    Ok(())
}

#[then(r#"the rejection reports a transition from "{from}" to "{to}""#)]
fn rejection_reports_transition(
    world: &TaskLifecycleWorld,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let expected_from = TaskStatus::try_from(from.as_str())?;
    let expected_to = TaskStatus::try_from(to.as_str())?;
    match world.last_update()? {
        Err(TaskLifecycleError::Domain(TaskDomainError::InvalidTransition { from, to, .. }))
            if *from == expected_from && *to == expected_to =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected transition {expected_from} -> {expected_to}, got {other:?}"
        )),
    }
}

#[then(r#"the task has status "{status}""#)]
fn task_has_status(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let task = stored_task(world)?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task has priority "{priority}""#)]
fn task_has_priority(world: &TaskLifecycleWorld, priority: String) -> Result<(), eyre::Report> {
    let expected = TaskPriority::try_from(priority.as_str())?;
    let task = stored_task(world)?;
    eyre::ensure!(
        task.priority() == expected,
        "expected priority {expected}, found {}",
        task.priority()
    );
    Ok(())
}
