//! Durable key-value store port.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueStoreResult<T> = Result<T, KeyValueStoreError>;

/// Process-external storage holding string values under string keys.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the store cannot be read.
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>>;

    /// Replaces the value stored under `key` wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::QuotaExceeded`] when the value does not
    /// fit, or another [`KeyValueStoreError`] when the store is unavailable.
    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// The key cannot be represented by this store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Writing the value would exceed the storage quota.
    #[error("storage quota of {limit} bytes exceeded writing {requested} bytes")]
    QuotaExceeded {
        /// Quota in bytes.
        limit: usize,
        /// Total bytes the write would have occupied.
        requested: usize,
    },

    /// Storage is disabled or otherwise unreachable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Underlying I/O failure.
    #[error("storage i/o error: {0}")]
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for KeyValueStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
