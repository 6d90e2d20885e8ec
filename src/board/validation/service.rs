//! Default task validator.

use crate::board::{
    domain::NewTask,
    error::TaskValidationError,
    ports::{TaskDraft, TaskValidator, ValidationConfig, ValidationResult},
};

use super::rules::{parse_due_date, validate_description, validate_text};

/// Validator applying the rules in [`super::rules`] with configured limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTaskValidator {
    config: ValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a validator with the given limits.
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the configured limits.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, draft: &TaskDraft) -> ValidationResult<NewTask> {
        let mut errors = Vec::new();

        let text = match validate_text(&draft.text, &self.config) {
            Ok(text) => text,
            Err(err) => {
                errors.push(err);
                String::new()
            }
        };
        if let Err(err) = validate_description(draft.description.as_deref(), &self.config) {
            errors.push(err);
        }
        let due_date = match parse_due_date(draft.due_date.as_deref()) {
            Ok(due_date) => due_date,
            Err(err) => {
                errors.push(err);
                None
            }
        };

        if let Some(error) = TaskValidationError::combine(errors) {
            return Err(error);
        }

        Ok(NewTask {
            text,
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            due_date,
            assignee: draft.assignee.clone(),
            category: draft.category.clone(),
        })
    }
}
