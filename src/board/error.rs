//! Validation error types for task input.
//!
//! Uses `thiserror` so callers can match on individual field failures.

use thiserror::Error;

/// Errors produced while validating task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The task text is empty or whitespace-only.
    #[error("task text cannot be empty")]
    EmptyText,

    /// The task text exceeds the configured length.
    #[error("task text has {actual} characters, exceeds limit of {max}")]
    TextTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// The description exceeds the configured length.
    #[error("description has {actual} characters, exceeds limit of {max}")]
    DescriptionTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// The due date is not a recognisable date or timestamp.
    #[error("invalid due date '{0}', expected RFC 3339 or YYYY-MM-DD")]
    InvalidDueDate(String),

    /// Several fields failed validation.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[TaskValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TaskValidationError {
    /// Combines collected errors, unwrapping a single error.
    ///
    /// Returns `None` when `errors` is empty.
    #[must_use]
    pub fn combine(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns the individual errors, flattening a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(errors) => errors,
            single => std::slice::from_ref(single),
        }
    }
}
