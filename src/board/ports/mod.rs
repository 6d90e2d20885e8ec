//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod storage;
pub mod validator;

pub use storage::{KeyValueStore, StorageError, StorageResult};
pub use validator::{TaskDraft, TaskValidator, ValidationConfig, ValidationResult};
