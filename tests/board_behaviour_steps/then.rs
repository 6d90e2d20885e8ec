//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, list};
use rstest_bdd_macros::then;
use taskboard::board::domain::{Task, TaskStatus};

fn texts(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::text).collect()
}

#[then(r#"the "{status}" column lists "{expected}""#)]
fn column_lists(world: &BoardWorld, status: String, expected: String) -> Result<(), eyre::Report> {
    let column_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let column = world.board.by_status(column_status);

    let actual = texts(&column);
    eyre::ensure!(
        actual == list(&expected),
        "column {status} lists {actual:?}, expected {expected:?}"
    );
    Ok(())
}

#[then("every column has dense positions")]
fn every_column_dense(world: &BoardWorld) -> Result<(), eyre::Report> {
    for status in TaskStatus::ALL {
        let orders: Vec<usize> = world
            .board
            .by_status(status)
            .iter()
            .map(Task::order)
            .collect();
        let expected: Vec<usize> = (0..orders.len()).collect();
        eyre::ensure!(
            orders == expected,
            "column {} has positions {orders:?}",
            status.as_str()
        );
    }
    Ok(())
}

#[then(r#"the visible tasks are "{expected}""#)]
fn visible_tasks_are(world: &BoardWorld, expected: String) -> Result<(), eyre::Report> {
    let visible = world.board.filtered_sorted();

    let actual = texts(&visible);
    eyre::ensure!(
        actual == list(&expected),
        "visible tasks are {actual:?}, expected {expected:?}"
    );
    Ok(())
}

#[then("{count:u64} tasks are visible")]
fn count_visible(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let visible = u64::try_from(world.board.filtered_sorted().len())?;
    eyre::ensure!(visible == count, "{visible} tasks visible, expected {count}");
    Ok(())
}

#[then("no error is reported")]
fn no_error(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.board.error().is_none(),
        "unexpected error {:?}",
        world.board.error()
    );
    Ok(())
}

#[then(r#"the error "{message}" is reported"#)]
fn error_reported(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.board.error() == Some(message.as_str()),
        "error was {:?}, expected {message:?}",
        world.board.error()
    );
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.board.tasks().is_empty(),
        "board holds {} tasks",
        world.board.tasks().len()
    );
    Ok(())
}

#[then("the submission is rejected")]
fn submission_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no submission recorded"))?;
    eyre::ensure!(result.is_err(), "submission was accepted: {result:?}");
    Ok(())
}
