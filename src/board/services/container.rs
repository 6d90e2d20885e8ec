//! Process-wide owner of board state.
//!
//! [`BoardContainer`] holds the single [`AppState`], routes every change
//! through [`reduce`] and writes the task collection to storage after each
//! dispatched command. It is constructed explicitly and handed to whatever
//! needs it; there is no ambient instance.

use std::sync::Arc;

use mockable::Clock;

use crate::board::{
    config::BoardConfig,
    domain::{
        AppState, Command, FilterPatch, NewTask, SortConfig, Task, TaskId, TaskPatch, TaskStatus,
    },
    ports::{KeyValueStore, TaskDraft, TaskValidator, ValidationResult},
    reducer::reduce,
    validation::DefaultTaskValidator,
    view::{self, BoardStats},
};

use super::persistence::TaskPersistence;

/// Error message shown when persisted tasks cannot be read.
pub const LOAD_ERROR_MESSAGE: &str = "failed to load tasks";

/// Error message shown when tasks cannot be written.
pub const SAVE_ERROR_MESSAGE: &str = "failed to save tasks";

/// Owner of the board state for the lifetime of the application.
///
/// Dispatch takes `&mut self`, so commands are applied one at a time and
/// saves happen in dispatch order.
pub struct BoardContainer<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    state: AppState,
    persistence: TaskPersistence<S>,
    clock: Arc<C>,
    validator: Arc<dyn TaskValidator>,
    storage_key: String,
    initialized: bool,
}

impl<S, C> BoardContainer<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a container with the default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(store, clock, BoardConfig::default())
    }

    /// Creates a container with an explicit configuration.
    #[must_use]
    pub fn with_config(store: Arc<S>, clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            state: AppState::default(),
            persistence: TaskPersistence::new(store),
            clock,
            validator: Arc::new(DefaultTaskValidator::new(config.validation)),
            storage_key: config.storage_key,
            initialized: false,
        }
    }

    /// Replaces the validator used by [`Self::create_validated`].
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn TaskValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Loads persisted tasks into the board.
    ///
    /// Sets the loading flag for the duration of the load. Absent or empty
    /// storage leaves the board empty; unreadable storage leaves it empty and
    /// records [`LOAD_ERROR_MESSAGE`]. Nothing is written back.
    ///
    /// Only the first call reads storage; later calls leave the in-memory
    /// board as it is.
    pub async fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("board already initialized; skipping load");
            return;
        }
        self.initialized = true;
        self.apply(Command::SetLoading(true));

        match self
            .persistence
            .try_load::<Vec<Task>>(&self.storage_key)
            .await
        {
            Ok(Some(tasks)) if !tasks.is_empty() => {
                tracing::info!(count = tasks.len(), "loaded persisted tasks");
                self.apply(Command::LoadTasks(tasks));
            }
            Ok(_) => tracing::debug!("no persisted tasks found"),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load persisted tasks");
                self.apply(Command::SetError(Some(LOAD_ERROR_MESSAGE.to_owned())));
            }
        }

        self.apply(Command::SetLoading(false));
    }

    /// Applies a command and persists the resulting task collection.
    ///
    /// A failed save records [`SAVE_ERROR_MESSAGE`] in the state; the
    /// in-memory change is kept.
    pub async fn dispatch(&mut self, command: Command) {
        tracing::debug!(command = command.kind(), "dispatching board command");
        self.apply(command);

        if self
            .persistence
            .save(&self.storage_key, &self.state.tasks)
            .await
            .is_err()
        {
            self.apply(Command::SetError(Some(SAVE_ERROR_MESSAGE.to_owned())));
        }
    }

    /// Creates a task and returns its identifier.
    pub async fn create_task(&mut self, fields: NewTask) -> Option<TaskId> {
        self.dispatch(Command::Create(fields)).await;
        self.state.tasks.last().map(|task| task.id().clone())
    }

    /// Validates a draft and creates a task from it.
    ///
    /// # Errors
    ///
    /// Returns the validator's error without touching the board when the
    /// draft is invalid.
    pub async fn create_validated(
        &mut self,
        draft: &TaskDraft,
    ) -> ValidationResult<Option<TaskId>> {
        let fields = self.validator.validate(draft)?;
        Ok(self.create_task(fields).await)
    }

    /// Merges `patch` onto the task with `id`.
    pub async fn update_task(&mut self, id: TaskId, patch: TaskPatch) {
        self.dispatch(Command::Update { id, patch }).await;
    }

    /// Deletes the task with `id`.
    pub async fn delete_task(&mut self, id: TaskId) {
        self.dispatch(Command::Delete(id)).await;
    }

    /// Moves the task with `id` to `new_status`.
    ///
    /// `new_order` is advisory; the task lands at its collection position
    /// within the destination group.
    pub async fn move_task(&mut self, id: TaskId, new_status: TaskStatus, new_order: usize) {
        self.dispatch(Command::Move {
            id,
            new_status,
            new_order,
        })
        .await;
    }

    /// Merges filter fields onto the active filters.
    pub async fn set_filters(&mut self, patch: FilterPatch) {
        self.dispatch(Command::SetFilters(patch)).await;
    }

    /// Replaces the active sort.
    pub async fn set_sort(&mut self, sort: SortConfig) {
        self.dispatch(Command::SetSort(sort)).await;
    }

    /// Resets the filters to their empty default.
    pub async fn clear_filters(&mut self) {
        self.dispatch(Command::ClearFilters).await;
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Returns the tasks passing the active filters in the active sort.
    #[must_use]
    pub fn filtered_sorted(&self) -> Vec<Task> {
        view::filtered_sorted(&self.state)
    }

    /// Returns one board column ordered by group position.
    #[must_use]
    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        view::by_status(&self.state, status)
    }

    /// Returns the distinct assignees across all tasks.
    #[must_use]
    pub fn available_assignees(&self) -> Vec<String> {
        view::available_assignees(&self.state)
    }

    /// Returns the distinct categories across all tasks.
    #[must_use]
    pub fn available_categories(&self) -> Vec<String> {
        view::available_categories(&self.state)
    }

    /// Returns status and priority totals.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        view::stats(&self.state)
    }

    /// Returns `true` while the initial load is running.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    fn apply(&mut self, command: Command) {
        self.state = reduce(&self.state, command, &*self.clock);
    }
}
