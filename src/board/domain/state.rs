//! Whole-board application state.

use super::{FilterConfig, SortConfig, Task};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the board displays.
///
/// Values are produced by [`reduce`](crate::board::reducer::reduce); each
/// command yields a fresh snapshot and leaves the previous one untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Active list filters.
    pub filters: FilterConfig,
    /// Active list sort.
    pub sort: SortConfig,
    /// Whether the initial load is in flight.
    pub loading: bool,
    /// User-facing error message, if the last load or save failed.
    pub error: Option<String>,
}

impl AppState {
    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: &super::TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Counts tasks in a status group.
    #[must_use]
    pub fn count_in(&self, status: super::TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .count()
    }
}
