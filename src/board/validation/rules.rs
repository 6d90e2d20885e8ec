//! Individual validation rules.
//!
//! Each rule is a pure function checking one field. Rules return `Ok` on
//! success or the specific [`TaskValidationError`] on failure.

use chrono::{DateTime, NaiveDate, Utc};

use crate::board::{error::TaskValidationError, ports::ValidationConfig};

/// Validates the task text and returns it trimmed.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyText`] for blank text and
/// [`TaskValidationError::TextTooLong`] when the trimmed text exceeds the
/// configured limit.
pub fn validate_text(
    text: &str,
    config: &ValidationConfig,
) -> Result<String, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    let actual = trimmed.chars().count();
    if actual > config.max_text_length {
        return Err(TaskValidationError::TextTooLong {
            max: config.max_text_length,
            actual,
        });
    }
    Ok(trimmed.to_owned())
}

/// Validates an optional description.
///
/// # Errors
///
/// Returns [`TaskValidationError::DescriptionTooLong`] when the description
/// exceeds the configured limit.
pub fn validate_description(
    description: Option<&str>,
    config: &ValidationConfig,
) -> Result<(), TaskValidationError> {
    let Some(text) = description else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual > config.max_description_length {
        return Err(TaskValidationError::DescriptionTooLong {
            max: config.max_description_length,
            actual,
        });
    }
    Ok(())
}

/// Parses an optional due date.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
/// Blank input means no due date.
///
/// # Errors
///
/// Returns [`TaskValidationError::InvalidDueDate`] when the input is neither.
///
/// # Examples
///
/// ```
/// use taskboard::board::validation::rules::parse_due_date;
///
/// let due = parse_due_date(Some("2024-12-31")).expect("valid date");
/// let rendered = due.map(|at| at.to_rfc3339());
/// assert_eq!(rendered.as_deref(), Some("2024-12-31T00:00:00+00:00"));
/// assert!(parse_due_date(Some("tomorrow-ish")).is_err());
/// ```
pub fn parse_due_date(
    input: Option<&str>,
) -> Result<Option<DateTime<Utc>>, TaskValidationError> {
    let Some(raw) = input.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Some(midnight.and_utc()))
        .ok_or_else(|| TaskValidationError::InvalidDueDate(raw.to_owned()))
}
