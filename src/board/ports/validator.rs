//! Validator port for task input.
//!
//! Form input is checked before a create command is issued; invalid input
//! never reaches the reducer.

use crate::board::{
    domain::{NewTask, Priority, TaskStatus},
    error::TaskValidationError,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, TaskValidationError>;

/// Raw, unvalidated task input as a form would submit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task summary as typed.
    pub text: String,
    /// Description as typed.
    pub description: Option<String>,
    /// Chosen column.
    pub status: Option<TaskStatus>,
    /// Chosen priority.
    pub priority: Option<Priority>,
    /// Due date as typed (`RFC 3339` or `YYYY-MM-DD`).
    pub due_date: Option<String>,
    /// Assignee as typed.
    pub assignee: Option<String>,
    /// Category as typed.
    pub category: Option<String>,
}

impl TaskDraft {
    /// Creates a draft with only the text filled in.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date input.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Port for task input validation.
///
/// Implementations should collect every field failure before returning and
/// be stateless.
pub trait TaskValidator: Send + Sync {
    /// Validates a draft and converts it into create fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when any field is invalid. Several
    /// failures are combined into [`TaskValidationError::Multiple`].
    fn validate(&self, draft: &TaskDraft) -> ValidationResult<NewTask>;
}

/// Limits applied by the default validator.
///
/// # Examples
///
/// ```
/// use taskboard::board::ports::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_text_length, 200);
///
/// let strict = ValidationConfig::strict();
/// assert!(strict.max_text_length < config.max_text_length);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum task text length in characters.
    pub max_text_length: usize,
    /// Maximum description length in characters.
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_text_length: 200,
            max_description_length: 1000,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration with generous limits.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_text_length: 2_000,
            max_description_length: 20_000,
        }
    }

    /// Creates a configuration with tight limits for compact displays.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_text_length: 80,
            max_description_length: 500,
        }
    }
}
