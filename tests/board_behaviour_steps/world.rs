//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::SteppingClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Task, TaskId},
    ports::ValidationResult,
    services::BoardContainer,
};

/// Board type used by the BDD world.
pub type TestBoard = BoardContainer<InMemoryKeyValueStore, SteppingClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub store: Arc<InMemoryKeyValueStore>,
    pub board: TestBoard,
    pub last_submission: Option<ValidationResult<Option<TaskId>>>,
}

impl BoardWorld {
    /// Creates a world with an empty store and board.
    #[must_use]
    pub fn new() -> Self {
        Self::over(Arc::new(InMemoryKeyValueStore::new()))
    }

    /// Creates a world whose board reads and writes `store`.
    #[must_use]
    pub fn over(store: Arc<InMemoryKeyValueStore>) -> Self {
        let board = open_board(&store);
        Self {
            store,
            board,
            last_submission: None,
        }
    }

    /// Replaces the board with a fresh one over the same store.
    pub fn reopen(&mut self) {
        self.board = open_board(&self.store);
        run_async(self.board.initialize());
    }

    /// Finds a task by its text.
    pub fn task_named(&self, text: &str) -> Result<&Task, eyre::Report> {
        self.board
            .tasks()
            .iter()
            .find(|task| task.text() == text)
            .ok_or_else(|| eyre::eyre!("no task with text {text:?}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn open_board(store: &Arc<InMemoryKeyValueStore>) -> TestBoard {
    BoardContainer::new(Arc::clone(store), Arc::new(SteppingClock::new()))
}

/// Splits a comma-separated step argument into trimmed items.
pub fn list(items: &str) -> Vec<&str> {
    items
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
