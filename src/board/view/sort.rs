//! Ordering rules for the task list view.

use std::cmp::Ordering;

use crate::board::domain::{Priority, SortConfig, SortDirection, SortField, Task};
use chrono::{DateTime, Utc};

/// Sorts `tasks` in place. Equal keys keep their current relative order.
pub fn sort_tasks(tasks: &mut [Task], sort: SortConfig) {
    tasks.sort_by(|left, right| compare(left, right, sort));
}

/// Compares two tasks under `sort`.
///
/// A missing due date compares as the far future, so ascending due-date
/// order lists undated tasks last.
#[must_use]
pub fn compare(left: &Task, right: &Task, sort: SortConfig) -> Ordering {
    let ordering = match sort.field {
        SortField::Text => left.text().to_lowercase().cmp(&right.text().to_lowercase()),
        SortField::CreatedAt => left.created_at().cmp(&right.created_at()),
        SortField::UpdatedAt => last_touched(left).cmp(&last_touched(right)),
        SortField::DueDate => due_or_never(left).cmp(&due_or_never(right)),
        SortField::Priority => {
            Priority::rank(left.priority()).cmp(&Priority::rank(right.priority()))
        }
        SortField::Assignee => left
            .assignee()
            .unwrap_or_default()
            .cmp(right.assignee().unwrap_or_default()),
        SortField::Category => left
            .category()
            .unwrap_or_default()
            .cmp(right.category().unwrap_or_default()),
    };

    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn last_touched(task: &Task) -> DateTime<Utc> {
    task.updated_at().unwrap_or_else(|| task.created_at())
}

fn due_or_never(task: &Task) -> DateTime<Utc> {
    task.due_date().unwrap_or(DateTime::<Utc>::MAX_UTC)
}
