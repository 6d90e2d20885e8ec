//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::{
    domain::{FilterPatch, NewTask, SortConfig, SortDirection, SortField, TaskStatus},
    ports::TaskDraft,
};

#[when(r#"the task "{text}" is added"#)]
fn task_is_added(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    run_async(world.board.create_task(NewTask::new(text)))
        .ok_or_else(|| eyre::eyre!("task was not created"))?;
    Ok(())
}

#[when(r#""{text}" is moved to "{status}""#)]
fn task_is_moved(world: &mut BoardWorld, text: String, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.task_named(&text)?.id().clone();
    run_async(world.board.move_task(id, target, 0));
    Ok(())
}

#[when(r#"the list is searched for "{search}""#)]
fn list_is_searched(world: &mut BoardWorld, search: String) {
    run_async(world.board.set_filters(FilterPatch::default().search(search)));
}

#[when("the filters are cleared")]
fn filters_are_cleared(world: &mut BoardWorld) {
    run_async(world.board.clear_filters());
}

#[when(r#"the list is sorted by "{field}" "{direction}""#)]
fn list_is_sorted(
    world: &mut BoardWorld,
    field: String,
    direction: String,
) -> Result<(), eyre::Report> {
    let sort = SortConfig::new(
        SortField::try_from(field.as_str())?,
        SortDirection::try_from(direction.as_str())?,
    );
    run_async(world.board.set_sort(sort));
    Ok(())
}

#[when("the board is reopened")]
fn board_is_reopened(world: &mut BoardWorld) {
    world.reopen();
}

#[when(r#"the task form is submitted with text "{text}""#)]
fn task_form_is_submitted(world: &mut BoardWorld, text: String) {
    let result = run_async(world.board.create_validated(&TaskDraft::new(text)));
    world.last_submission = Some(result);
}
