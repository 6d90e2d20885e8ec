//! Filter predicate for the task list view.

use crate::board::domain::{FilterConfig, Task};

/// Returns `true` when `task` satisfies every active filter dimension.
#[must_use]
pub fn matches(task: &Task, filters: &FilterConfig) -> bool {
    matches_status(task, filters)
        && matches_search(task, &filters.search)
        && matches_exact(task.assignee(), filters.assignee.as_deref())
        && matches_exact(task.category(), filters.category.as_deref())
        && matches_priority(task, filters)
}

fn matches_status(task: &Task, filters: &FilterConfig) -> bool {
    filters.statuses.is_empty() || filters.statuses.contains(&task.status())
}

/// Case-insensitive substring match over text, description and assignee.
fn matches_search(task: &Task, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    [Some(task.text()), task.description(), task.assignee()]
        .into_iter()
        .flatten()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

fn matches_exact(value: Option<&str>, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|expected| value == Some(expected))
}

/// Untagged tasks never satisfy a non-empty priority filter.
fn matches_priority(task: &Task, filters: &FilterConfig) -> bool {
    filters.priorities.is_empty()
        || task
            .priority()
            .is_some_and(|priority| filters.priorities.contains(&priority))
}
