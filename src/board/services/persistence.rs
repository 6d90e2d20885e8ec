//! Persistence service translating between board values and raw storage.
//!
//! Values are stored as JSON under a key. Loading never fails from the
//! caller's point of view: a missing or unreadable value yields the supplied
//! default and a logged warning.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::board::ports::{KeyValueStore, StorageError};

/// Errors raised while persisting board values.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The value could not be serialized.
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        /// Storage key being written.
        key: String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// The stored value could not be deserialized.
    #[error("failed to decode value for key '{key}': {source}")]
    Decode {
        /// Storage key being read.
        key: String,
        /// Underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// JSON persistence over a [`KeyValueStore`].
#[derive(Debug)]
pub struct TaskPersistence<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> Clone for TaskPersistence<S>
where
    S: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> TaskPersistence<S>
where
    S: KeyValueStore,
{
    /// Creates a persistence service over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reads and decodes the value under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] when the read fails and
    /// [`PersistenceError::Decode`] when the stored text is not valid JSON
    /// for `T`.
    pub async fn try_load<T>(&self, key: &str) -> PersistenceResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistenceError::Decode {
                key: key.to_owned(),
                source,
            })
    }

    /// Reads the value under `key`, falling back to `default`.
    ///
    /// Absent values, read failures and corrupt data all yield `default`;
    /// failures are logged.
    pub async fn load<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_load(key).await {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to load persisted value, using default");
                default
            }
        }
    }

    /// Encodes and writes `value` under `key`.
    ///
    /// Failures are logged before being returned so callers may record them
    /// as state rather than propagate them.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Encode`] when `value` cannot be
    /// serialized and [`PersistenceError::Storage`] when the write fails.
    pub async fn save<T>(&self, key: &str, value: &T) -> PersistenceResult<()>
    where
        T: Serialize + ?Sized + Sync,
    {
        let result = self.write(key, value).await;
        if let Err(err) = &result {
            tracing::warn!(key, error = %err, "failed to save value");
        }
        result
    }

    /// Removes the value under `key`, logging and swallowing failures.
    pub async fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key).await {
            tracing::warn!(key, error = %err, "failed to remove value");
        }
    }

    /// Removes every stored value, logging and swallowing failures.
    pub async fn clear(&self) {
        if let Err(err) = self.store.clear().await {
            tracing::warn!(error = %err, "failed to clear storage");
        }
    }

    async fn write<T>(&self, key: &str, value: &T) -> PersistenceResult<()>
    where
        T: Serialize + ?Sized + Sync,
    {
        let encoded = serde_json::to_string(value).map_err(|source| PersistenceError::Encode {
            key: key.to_owned(),
            source,
        })?;
        self.store.set(key, &encoded).await?;
        Ok(())
    }
}
