//! Derived views over board state.
//!
//! Every function here is pure and recomputes its result from the snapshot
//! it is given; nothing is cached between calls.

mod filter;
mod sort;
mod stats;

use std::collections::BTreeSet;

use crate::board::domain::{AppState, Task, TaskStatus};

pub use filter::matches;
pub use sort::{compare, sort_tasks};
pub use stats::BoardStats;

/// Tasks passing the active filters, ordered by the active sort.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskboard::board::domain::{AppState, Command, FilterPatch, NewTask};
/// use taskboard::board::{reducer::reduce, view};
///
/// let clock = DefaultClock;
/// let mut state = AppState::default();
/// for text in ["Buy milk", "Book flights"] {
///     state = reduce(&state, Command::Create(NewTask::new(text)), &clock);
/// }
/// let search = FilterPatch::default().search("MILK");
/// state = reduce(&state, Command::SetFilters(search), &clock);
///
/// let visible = view::filtered_sorted(&state);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible.first().map(|task| task.text()), Some("Buy milk"));
/// ```
#[must_use]
pub fn filtered_sorted(state: &AppState) -> Vec<Task> {
    let mut visible: Vec<Task> = state
        .tasks
        .iter()
        .filter(|task| matches(task, &state.filters))
        .cloned()
        .collect();
    sort_tasks(&mut visible, state.sort);
    visible
}

/// One board column: tasks with `status`, ascending by group position.
#[must_use]
pub fn by_status(state: &AppState, status: TaskStatus) -> Vec<Task> {
    let mut column: Vec<Task> = state
        .tasks
        .iter()
        .filter(|task| task.status() == status)
        .cloned()
        .collect();
    column.sort_by_key(Task::order);
    column
}

/// Distinct non-empty assignees across all tasks, alphabetically.
#[must_use]
pub fn available_assignees(state: &AppState) -> Vec<String> {
    distinct_values(&state.tasks, Task::assignee)
}

/// Distinct non-empty categories across all tasks, alphabetically.
#[must_use]
pub fn available_categories(state: &AppState) -> Vec<String> {
    distinct_values(&state.tasks, Task::category)
}

/// Status and priority totals across all tasks.
#[must_use]
pub fn stats(state: &AppState) -> BoardStats {
    BoardStats::from_tasks(&state.tasks)
}

fn distinct_values<'a>(
    tasks: &'a [Task],
    field: impl Fn(&'a Task) -> Option<&'a str>,
) -> Vec<String> {
    tasks
        .iter()
        .filter_map(field)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
