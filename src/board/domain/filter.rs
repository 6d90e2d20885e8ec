//! Filter configuration for the task list view.

use super::{Priority, TaskStatus};
use serde::{Deserialize, Serialize};

/// Active list filters.
///
/// Every dimension is optional: an empty collection or absent value places
/// no constraint on it. Dimensions combine with AND; values inside one
/// multi-value dimension combine with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Statuses to keep.
    #[serde(default)]
    pub statuses: Vec<TaskStatus>,
    /// Case-insensitive search over text, description and assignee.
    #[serde(default)]
    pub search: String,
    /// Exact assignee to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Exact category to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Priorities to keep.
    #[serde(default)]
    pub priorities: Vec<Priority>,
}

impl FilterConfig {
    /// Returns `true` when no dimension constrains the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a copy with the patch's present fields applied.
    #[must_use]
    pub fn merged(&self, patch: FilterPatch) -> Self {
        let FilterPatch {
            statuses,
            search,
            assignee,
            category,
            priorities,
        } = patch;

        Self {
            statuses: statuses.unwrap_or_else(|| self.statuses.clone()),
            search: search.unwrap_or_else(|| self.search.clone()),
            assignee: assignee.unwrap_or_else(|| self.assignee.clone()),
            category: category.unwrap_or_else(|| self.category.clone()),
            priorities: priorities.unwrap_or_else(|| self.priorities.clone()),
        }
    }
}

/// Partial filter update; omitted fields keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    /// Replacement status set.
    #[serde(default)]
    pub statuses: Option<Vec<TaskStatus>>,
    /// Replacement search text.
    #[serde(default)]
    pub search: Option<String>,
    /// Replacement assignee constraint; `Some(None)` removes it.
    #[serde(default)]
    pub assignee: Option<Option<String>>,
    /// Replacement category constraint; `Some(None)` removes it.
    #[serde(default)]
    pub category: Option<Option<String>>,
    /// Replacement priority set.
    #[serde(default)]
    pub priorities: Option<Vec<Priority>>,
}

impl FilterPatch {
    /// Sets the status set.
    #[must_use]
    pub fn statuses(mut self, statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets or removes the assignee constraint.
    #[must_use]
    pub fn assignee(mut self, assignee: Option<String>) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets or removes the category constraint.
    #[must_use]
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the priority set.
    #[must_use]
    pub fn priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = Some(priorities.into_iter().collect());
        self
    }
}
