//! Application services for the task board.

mod container;
mod persistence;

pub use container::{BoardContainer, LOAD_ERROR_MESSAGE, SAVE_ERROR_MESSAGE};
pub use persistence::{PersistenceError, PersistenceResult, TaskPersistence};
