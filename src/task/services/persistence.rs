//! Persistent store adapter mirroring the task collection into a
//! key-value store.
//!
//! The whole ordered collection is serialized as one JSON array under a
//! fixed key and overwritten on every save. [`TaskStore::load`] and
//! [`TaskStore::save`] never fail from the caller's point of view: problems
//! are logged and the in-memory collection stays authoritative. The strict
//! [`TaskStore::try_load`] and [`TaskStore::try_save`] expose the failure
//! for callers that want to observe it.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::task::{
    domain::Task,
    ports::{KeyValueStore, KeyValueStoreError},
};

/// Storage key used by default, compatible with previously saved data.
pub const DEFAULT_STORE_KEY: &str = "organized_todos_pro";

/// Configuration for [`TaskStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Key holding the serialized task collection.
    pub key: String,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORE_KEY.to_owned(),
        }
    }
}

impl TaskStoreConfig {
    /// Creates a configuration storing tasks under `key`.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Errors surfaced by the strict load and save operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// The persisted blob is not a valid task collection.
    #[error("corrupt task data under key {key:?}: {reason}")]
    CorruptStoreData {
        /// Key that held the blob.
        key: String,
        /// Why the blob was rejected.
        reason: String,
    },

    /// The collection could not be encoded for saving.
    #[error("failed to encode tasks for key {key:?}: {source}")]
    Encode {
        /// Key the collection was destined for.
        key: String,
        /// Encoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// The underlying store could not be read or written.
    #[error("task store unavailable: {0}")]
    StoreUnavailable(#[from] KeyValueStoreError),
}

/// Result type for strict task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Best-effort mirror of the task collection.
#[derive(Debug)]
pub struct TaskStore<S>
where
    S: KeyValueStore,
{
    backend: Arc<S>,
    config: TaskStoreConfig,
}

impl<S> Clone for TaskStore<S>
where
    S: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            config: self.config.clone(),
        }
    }
}

impl<S> TaskStore<S>
where
    S: KeyValueStore,
{
    /// Creates a task store with the default configuration.
    #[must_use]
    pub fn new(backend: Arc<S>) -> Self {
        Self::with_config(backend, TaskStoreConfig::default())
    }

    /// Creates a task store with custom configuration.
    #[must_use]
    pub const fn with_config(backend: Arc<S>, config: TaskStoreConfig) -> Self {
        Self { backend, config }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Loads the persisted collection, falling back to an empty one.
    ///
    /// Missing data yields an empty collection silently; unreadable or
    /// corrupt data is logged and also yields an empty collection.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(
                    "event=task_store_load module=task status=error key={} error={err}",
                    self.config.key
                );
                Vec::new()
            }
        }
    }

    /// Saves the collection, logging rather than returning any failure.
    pub fn save(&self, tasks: &[Task]) {
        if let Err(err) = self.try_save(tasks) {
            warn!(
                "event=task_store_save module=task status=error key={} count={} error={err}",
                self.config.key,
                tasks.len()
            );
        }
    }

    /// Loads the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::StoreUnavailable`] when the store cannot be
    /// read, or [`TaskStoreError::CorruptStoreData`] when the blob does not
    /// parse, holds duplicate identifiers, or holds an identifier that is
    /// not a representable timestamp.
    pub fn try_load(&self) -> TaskStoreResult<Vec<Task>> {
        let Some(raw) = self.backend.get(&self.config.key)? else {
            debug!(
                "event=task_store_load module=task status=empty key={}",
                self.config.key
            );
            return Ok(Vec::new());
        };

        let tasks: Vec<Task> =
            serde_json::from_str(&raw).map_err(|err| self.corrupt(err.to_string()))?;
        validate_ids(&tasks).map_err(|reason| self.corrupt(reason))?;

        debug!(
            "event=task_store_load module=task status=ok key={} count={}",
            self.config.key,
            tasks.len()
        );
        Ok(tasks)
    }

    /// Overwrites the persisted collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::StoreUnavailable`] when the store rejects
    /// the write, or [`TaskStoreError::Encode`] when the collection cannot be
    /// encoded.
    pub fn try_save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let raw = serde_json::to_string(tasks).map_err(|source| TaskStoreError::Encode {
            key: self.config.key.clone(),
            source,
        })?;
        self.backend.set(&self.config.key, &raw)?;
        debug!(
            "event=task_store_save module=task status=ok key={} count={} bytes={}",
            self.config.key,
            tasks.len(),
            raw.len()
        );
        Ok(())
    }

    fn corrupt(&self, reason: String) -> TaskStoreError {
        TaskStoreError::CorruptStoreData {
            key: self.config.key.clone(),
            reason,
        }
    }
}

fn validate_ids(tasks: &[Task]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.id().timestamp().is_none() {
            return Err(format!("task identifier {} is out of range", task.id()));
        }
        if !seen.insert(task.id()) {
            return Err(format!("duplicate task identifier {}", task.id()));
        }
    }
    Ok(())
}
