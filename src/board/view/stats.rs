//! Summary counts for the board.

use crate::board::domain::{Priority, Task, TaskStatus};
use serde::Serialize;

/// Task totals by status and priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    /// All tasks.
    pub total: usize,
    /// Tasks not yet started.
    pub pending: usize,
    /// Tasks underway.
    pub in_progress: usize,
    /// Finished tasks.
    pub done: usize,
    /// High-priority tasks.
    pub high_priority: usize,
    /// Medium-priority tasks.
    pub medium_priority: usize,
    /// Low-priority tasks.
    pub low_priority: usize,
    /// Share of finished tasks, rounded to the nearest whole percent.
    pub progress_percent: u8,
}

impl BoardStats {
    /// Computes statistics over a task collection.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let with_status =
            |status: TaskStatus| tasks.iter().filter(|task| task.status() == status).count();
        let with_priority = |priority: Priority| {
            tasks
                .iter()
                .filter(|task| task.priority() == Some(priority))
                .count()
        };

        let total = tasks.len();
        let done = with_status(TaskStatus::Done);

        Self {
            total,
            pending: with_status(TaskStatus::Pending),
            in_progress: with_status(TaskStatus::InProgress),
            done,
            high_priority: with_priority(Priority::High),
            medium_priority: with_priority(Priority::Medium),
            low_priority: with_priority(Priority::Low),
            progress_percent: rounded_percent(done, total),
        }
    }
}

/// `part / whole` as a percentage rounded half up; zero for an empty whole.
fn rounded_percent(part: usize, whole: usize) -> u8 {
    part.saturating_mul(200)
        .saturating_add(whole)
        .checked_div(whole.saturating_mul(2))
        .and_then(|percent| u8::try_from(percent).ok())
        .unwrap_or(if whole == 0 { 0 } else { 100 })
}
