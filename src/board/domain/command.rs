//! Commands accepted by the board reducer.

use super::{FilterPatch, NewTask, SortConfig, Task, TaskId, TaskPatch, TaskStatus};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// An intent to change board state.
///
/// Serialized commands carry a `type` tag and a `payload`. Tags this
/// version does not recognise deserialize as [`Command::Unknown`] whatever
/// their payload, and the reducer answers them with the unchanged state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Append a new task to the end of its status group.
    Create(NewTask),
    /// Merge fields onto an existing task.
    Update {
        /// Target task.
        id: TaskId,
        /// Fields to change.
        patch: TaskPatch,
    },
    /// Remove a task and close the gap in its group.
    Delete(TaskId),
    /// Move a task to another status group.
    #[serde(rename_all = "camelCase")]
    Move {
        /// Target task.
        id: TaskId,
        /// Destination group.
        new_status: TaskStatus,
        /// Requested position. Advisory only: a task changing group joins
        /// the end of its destination.
        new_order: usize,
    },
    /// Merge filter fields onto the active filters.
    SetFilters(FilterPatch),
    /// Replace the active sort.
    SetSort(SortConfig),
    /// Reset filters to their empty default.
    ClearFilters,
    /// Set the loading flag.
    SetLoading(bool),
    /// Set or clear the error message.
    SetError(Option<String>),
    /// Replace the whole task collection.
    LoadTasks(Vec<Task>),
    /// A command kind this version does not understand.
    Unknown,
}

impl Command {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete(_) => "delete",
            Self::Move { .. } => "move",
            Self::SetFilters(_) => "set_filters",
            Self::SetSort(_) => "set_sort",
            Self::ClearFilters => "clear_filters",
            Self::SetLoading(_) => "set_loading",
            Self::SetError(_) => "set_error",
            Self::LoadTasks(_) => "load_tasks",
            Self::Unknown => "unknown",
        }
    }
}

/// Wire envelope read before the payload is interpreted.
#[derive(Deserialize)]
struct CommandEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct UpdatePayload {
    id: TaskId,
    patch: TaskPatch,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovePayload {
    id: TaskId,
    new_status: TaskStatus,
    new_order: usize,
}

impl CommandEnvelope {
    fn into_command(self) -> serde_json::Result<Command> {
        let Self { kind, payload } = self;
        let command = match kind.as_str() {
            "CREATE" => Command::Create(serde_json::from_value(payload)?),
            "UPDATE" => {
                let UpdatePayload { id, patch } = serde_json::from_value(payload)?;
                Command::Update { id, patch }
            }
            "DELETE" => Command::Delete(serde_json::from_value(payload)?),
            "MOVE" => {
                let MovePayload {
                    id,
                    new_status,
                    new_order,
                } = serde_json::from_value(payload)?;
                Command::Move {
                    id,
                    new_status,
                    new_order,
                }
            }
            "SET_FILTERS" => Command::SetFilters(serde_json::from_value(payload)?),
            "SET_SORT" => Command::SetSort(serde_json::from_value(payload)?),
            "CLEAR_FILTERS" => Command::ClearFilters,
            "SET_LOADING" => Command::SetLoading(serde_json::from_value(payload)?),
            "SET_ERROR" => Command::SetError(serde_json::from_value(payload)?),
            "LOAD_TASKS" => Command::LoadTasks(serde_json::from_value(payload)?),
            _ => Command::Unknown,
        };
        Ok(command)
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CommandEnvelope::deserialize(deserializer)?
            .into_command()
            .map_err(D::Error::custom)
    }
}
