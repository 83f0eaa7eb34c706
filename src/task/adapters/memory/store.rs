//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying entries, so a clone handed to a
/// repository can be inspected from a test.
#[derive(Debug, Clone)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug)]
struct InMemoryStoreState {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    available: bool,
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::with_state(None)
    }
}

impl InMemoryKeyValueStore {
    /// Creates an empty, unlimited store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects writes once the total size of
    /// keys and values would exceed `quota_bytes`.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self::with_state(Some(quota_bytes))
    }

    fn with_state(quota_bytes: Option<usize>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryStoreState {
                entries: HashMap::new(),
                quota_bytes,
                available: true,
            })),
        }
    }

    /// Enables or disables the store. A disabled store fails every read and
    /// write with [`KeyValueStoreError::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Unavailable`] if the state lock is
    /// poisoned.
    pub fn set_available(&self, available: bool) -> KeyValueStoreResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state.available = available;
        Ok(())
    }
}

fn poisoned<E: std::fmt::Display>(err: &E) -> KeyValueStoreError {
    KeyValueStoreError::Unavailable(err.to_string())
}

fn ensure_available(state: &InMemoryStoreState) -> KeyValueStoreResult<()> {
    if state.available {
        Ok(())
    } else {
        Err(KeyValueStoreError::Unavailable(
            "in-memory store disabled".to_owned(),
        ))
    }
}

fn occupied_bytes(entries: &HashMap<String, String>, skip_key: &str) -> usize {
    entries
        .iter()
        .filter(|(key, _)| key.as_str() != skip_key)
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        ensure_available(&state)?;
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        ensure_available(&state)?;

        if let Some(limit) = state.quota_bytes {
            let requested = occupied_bytes(&state.entries, key) + key.len() + value.len();
            if requested > limit {
                return Err(KeyValueStoreError::QuotaExceeded { limit, requested });
            }
        }

        state.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
