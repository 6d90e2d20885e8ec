//! Pure state transition function for the board.
//!
//! [`reduce`] maps a snapshot and a [`Command`] to the next snapshot. It holds
//! no state between calls, never mutates its input and cannot fail: commands
//! aimed at unknown task identifiers return the input unchanged.

use std::collections::HashMap;

use crate::board::domain::{AppState, Command, FilterConfig, Task, TaskId, TaskStatus};
use mockable::Clock;

/// Applies `command` to `state` and returns the resulting snapshot.
///
/// The clock supplies creation and mutation timestamps.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskboard::board::domain::{AppState, Command, NewTask, TaskStatus};
/// use taskboard::board::reducer::reduce;
///
/// let state = reduce(
///     &AppState::default(),
///     Command::Create(NewTask::new("Write release notes")),
///     &DefaultClock,
/// );
///
/// assert_eq!(state.tasks.len(), 1);
/// assert_eq!(state.count_in(TaskStatus::Pending), 1);
/// ```
#[must_use]
pub fn reduce(state: &AppState, command: Command, clock: &impl Clock) -> AppState {
    match command {
        Command::Create(fields) => {
            let order = state.count_in(fields.status.unwrap_or_default());
            let mut tasks = state.tasks.clone();
            tasks.push(Task::create(fields, order, clock));
            with_tasks(state, tasks)
        }
        Command::Update { id, patch } => {
            let Some(index) = position_of(&state.tasks, &id) else {
                return state.clone();
            };
            let mut tasks = state.tasks.clone();
            let Some(task) = tasks.get_mut(index) else {
                return state.clone();
            };
            let previous_status = task.status();
            task.apply_patch(patch, clock);
            if task.status() != previous_status {
                task.set_order(usize::MAX);
                reassign_orders(&mut tasks);
            }
            with_tasks(state, tasks)
        }
        Command::Delete(id) => {
            if position_of(&state.tasks, &id).is_none() {
                return state.clone();
            }
            let mut tasks: Vec<Task> = state
                .tasks
                .iter()
                .filter(|task| *task.id() != id)
                .cloned()
                .collect();
            reassign_orders(&mut tasks);
            with_tasks(state, tasks)
        }
        // The requested position is advisory; groups are renumbered below.
        Command::Move { id, new_status, .. } => {
            let Some(index) = position_of(&state.tasks, &id) else {
                return state.clone();
            };
            let mut tasks = state.tasks.clone();
            let Some(task) = tasks.get_mut(index) else {
                return state.clone();
            };
            if task.status() != new_status {
                task.set_order(usize::MAX);
            }
            task.move_to(new_status, clock);
            reassign_orders(&mut tasks);
            with_tasks(state, tasks)
        }
        Command::SetFilters(patch) => AppState {
            filters: state.filters.merged(patch),
            ..state.clone()
        },
        Command::SetSort(sort) => AppState {
            sort,
            ..state.clone()
        },
        Command::ClearFilters => AppState {
            filters: FilterConfig::default(),
            ..state.clone()
        },
        Command::SetLoading(loading) => AppState {
            loading,
            ..state.clone()
        },
        Command::SetError(error) => AppState {
            error,
            ..state.clone()
        },
        Command::LoadTasks(mut tasks) => {
            reassign_orders(&mut tasks);
            AppState {
                tasks,
                loading: false,
                error: None,
                ..state.clone()
            }
        }
        Command::Unknown => state.clone(),
    }
}

/// Rebuilds a snapshot around a new task collection.
fn with_tasks(state: &AppState, tasks: Vec<Task>) -> AppState {
    AppState {
        tasks,
        filters: state.filters.clone(),
        sort: state.sort,
        loading: state.loading,
        error: state.error.clone(),
    }
}

fn position_of(tasks: &[Task], id: &TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

/// Numbers every status group `0..n`, keeping each group's current ranking.
///
/// Tasks rank by their existing `order`, then by collection position, so
/// duplicate or sparse orders collapse without reshuffling a column. A task
/// entering a column with `usize::MAX` lands at its end.
fn reassign_orders(tasks: &mut [Task]) {
    let mut groups: HashMap<TaskStatus, Vec<(usize, usize)>> = HashMap::new();
    for (index, task) in tasks.iter().enumerate() {
        groups
            .entry(task.status())
            .or_default()
            .push((task.order(), index));
    }
    for mut members in groups.into_values() {
        members.sort_unstable();
        for (position, (_, index)) in members.into_iter().enumerate() {
            if let Some(task) = tasks.get_mut(index) {
                task.set_order(position);
            }
        }
    }
}
