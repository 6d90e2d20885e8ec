//! Tests for JSON persistence over key-value stores.

use std::sync::Arc;

use super::support::{FailingStore, StepClock, create_all};
use crate::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{NewTask, Priority, Task},
    ports::KeyValueStore,
    services::{PersistenceError, TaskPersistence},
};
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saved_tasks_load_back_equal(store: Arc<InMemoryKeyValueStore>) -> eyre::Result<()> {
    let clock = StepClock::new();
    let state = create_all(
        &clock,
        [
            NewTask::new("Mow lawn").with_priority(Priority::Low),
            NewTask::new("Fix bike").with_assignee("sam"),
        ],
    );
    let persistence = TaskPersistence::new(Arc::clone(&store));

    persistence.save("todos", &state.tasks).await?;
    let restored: Option<Vec<Task>> = persistence.try_load("todos").await?;

    ensure!(restored.as_deref() == Some(state.tasks.as_slice()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_key_loads_as_none_or_default(
    store: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let persistence = TaskPersistence::new(store);

    let missing: Option<Vec<Task>> = persistence.try_load("todos").await?;
    let fallback = persistence.load("todos", vec![1_u8, 2, 3]).await;

    ensure!(missing.is_none());
    ensure!(fallback == vec![1, 2, 3]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_value_is_a_decode_error_and_falls_back() {
    let store = Arc::new(InMemoryKeyValueStore::with_entry("todos", "{not json"));
    let persistence = TaskPersistence::new(store);

    let result = persistence.try_load::<Vec<Task>>("todos").await;
    let fallback: Vec<Task> = persistence.load("todos", Vec::new()).await;

    assert!(
        matches!(result, Err(PersistenceError::Decode { ref key, .. }) if key == "todos"),
        "expected decode error, got {result:?}"
    );
    assert!(fallback.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn read_failure_is_a_storage_error_and_falls_back() {
    let persistence = TaskPersistence::new(Arc::new(FailingStore::failing_reads()));

    let result = persistence.try_load::<Vec<Task>>("todos").await;
    let fallback = persistence.load("todos", 7_u32).await;

    assert!(matches!(result, Err(PersistenceError::Storage(_))));
    assert_eq!(fallback, 7);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn write_failure_is_returned_to_the_caller() {
    let persistence = TaskPersistence::new(Arc::new(FailingStore::failing_writes()));

    let result = persistence.save("todos", &["a", "b"]).await;

    assert!(matches!(result, Err(PersistenceError::Storage(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_and_clear_delete_values(store: Arc<InMemoryKeyValueStore>) -> eyre::Result<()> {
    let persistence = TaskPersistence::new(Arc::clone(&store));
    persistence.save("first", &1).await?;
    persistence.save("second", &2).await?;

    persistence.remove("first").await;
    ensure!(store.get("first").await?.is_none());
    ensure!(store.get("second").await?.as_deref() == Some("2"));

    persistence.clear().await;
    ensure!(store.get("second").await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_and_clear_swallow_backend_failures() {
    let persistence = TaskPersistence::new(Arc::new(FailingStore::default()));

    persistence.remove("todos").await;
    persistence.clear().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn memory_store_clones_share_entries(store: Arc<InMemoryKeyValueStore>) -> eyre::Result<()> {
    let other = (*store).clone();

    other.set("shared", "value").await?;

    ensure!(store.get("shared").await?.as_deref() == Some("value"));
    Ok(())
}
