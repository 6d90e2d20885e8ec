//! Error types for board domain parsing.

use thiserror::Error;

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing sort fields or directions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseSortError {
    /// The sort field is not one of the sortable task fields.
    #[error("unknown sort field: {0}")]
    UnknownField(String),

    /// The sort direction is neither ascending nor descending.
    #[error("unknown sort direction: {0}")]
    UnknownDirection(String),
}
