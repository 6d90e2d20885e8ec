//! Sort configuration for the task list view.

use super::ParseSortError;
use serde::{Deserialize, Serialize};

/// Task field the list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Task text, compared case-insensitively.
    Text,
    /// Creation time.
    CreatedAt,
    /// Latest mutation time, falling back to creation time.
    UpdatedAt,
    /// Deadline; undated tasks compare as the far future.
    DueDate,
    /// Priority rank.
    Priority,
    /// Assignee name.
    Assignee,
    /// Category label.
    Category,
}

impl SortField {
    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
            Self::Assignee => "assignee",
            Self::Category => "category",
        }
    }
}

impl TryFrom<&str> for SortField {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "text" => Ok(Self::Text),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            "dueDate" | "due_date" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            "assignee" => Ok(Self::Assignee),
            "category" => Ok(Self::Category),
            _ => Err(ParseSortError::UnknownField(value.to_owned())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[serde(rename = "desc")]
    Descending,
}

impl TryFrom<&str> for SortDirection {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParseSortError::UnknownDirection(value.to_owned())),
        }
    }
}

/// The single active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Field to order by.
    pub field: SortField,
    /// Order direction.
    pub direction: SortDirection,
}

impl SortConfig {
    /// Creates a sort configuration.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Ascending sort on `field`.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Descending sort on `field`.
    #[must_use]
    pub const fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

impl Default for SortConfig {
    /// Newest tasks first.
    fn default() -> Self {
        Self::descending(SortField::CreatedAt)
    }
}
