//! Domain model for the task board.
//!
//! Tasks, filter and sort configuration, the board snapshot and the command
//! vocabulary. Nothing here touches storage.

mod command;
mod error;
mod filter;
mod ids;
mod sort;
mod state;
mod task;

pub use command::Command;
pub use error::{ParsePriorityError, ParseSortError, ParseTaskStatusError};
pub use filter::{FilterConfig, FilterPatch};
pub use ids::TaskId;
pub use sort::{SortConfig, SortDirection, SortField};
pub use state::AppState;
pub use task::{NewTask, PersistedTaskData, Priority, Task, TaskPatch, TaskStatus};
