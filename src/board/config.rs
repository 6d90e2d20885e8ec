//! Board configuration.

use crate::board::ports::ValidationConfig;

/// Storage key the task collection is persisted under by default.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Settings for a [`BoardContainer`](crate::board::services::BoardContainer).
///
/// # Examples
///
/// ```
/// use taskboard::board::config::BoardConfig;
/// use taskboard::board::ports::ValidationConfig;
///
/// let config = BoardConfig::default()
///     .with_storage_key("work_tasks")
///     .with_validation(ValidationConfig::strict());
/// assert_eq!(config.storage_key, "work_tasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key the task collection is stored under.
    pub storage_key: String,
    /// Limits applied to task input.
    pub validation: ValidationConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            validation: ValidationConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the validation limits.
    #[must_use]
    pub const fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }
}
