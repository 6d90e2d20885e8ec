//! Shared fakes and builders for board unit tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use crate::board::{
    domain::{AppState, Command, NewTask, PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{KeyValueStore, StorageError, StorageResult},
    reducer::reduce,
};

/// Clock that advances one second on every reading.
pub struct StepClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            start: base_time(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn at_seconds(offset: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(offset)
}

/// Builds a persisted task with only the fields tests usually care about.
pub fn task(id: &str, text: &str, status: TaskStatus, order: usize) -> PersistedTaskData {
    PersistedTaskData {
        id: TaskId::from(id),
        text: text.to_owned(),
        description: None,
        status,
        priority: None,
        due_date: None,
        assignee: None,
        category: None,
        created_at: base_time(),
        updated_at: None,
        order,
    }
}

pub fn state_with(tasks: impl IntoIterator<Item = PersistedTaskData>) -> AppState {
    AppState {
        tasks: tasks.into_iter().map(Task::from_persisted).collect(),
        ..AppState::default()
    }
}

/// Runs a sequence of create commands against an empty board.
pub fn create_all(clock: &StepClock, requests: impl IntoIterator<Item = NewTask>) -> AppState {
    requests
        .into_iter()
        .fold(AppState::default(), |state, request| {
            reduce(&state, Command::Create(request), clock)
        })
}

pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}

pub fn texts(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::text).collect()
}

/// Orders of one status group in collection order.
pub fn orders_in(state: &AppState, status: TaskStatus) -> Vec<usize> {
    state
        .tasks
        .iter()
        .filter(|task| task.status() == status)
        .map(Task::order)
        .collect()
}

/// Store whose reads and writes can be made to fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub stored: Option<String>,
}

impl FailingStore {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

fn unavailable() -> StorageError {
    StorageError::backend(std::io::Error::other("storage unavailable"))
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(unavailable());
        }
        Ok(self.stored.clone())
    }

    async fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(unavailable());
        }
        Ok(())
    }

    async fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(unavailable())
    }

    async fn clear(&self) -> StorageResult<()> {
        Err(unavailable())
    }
}
