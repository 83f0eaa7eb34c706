//! Directory-backed key-value store.
//!
//! Each key maps to `<key>.json` inside a capability-scoped directory.
//! Writes go to a temporary sibling first and are renamed into place, so a
//! reader never observes a half-written value.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::task::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Key-value store persisting one file per key.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> KeyValueStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir })
    }
}

/// Accepts keys that are safe to use as a single file name.
fn validate_key(key: &str) -> KeyValueStoreResult<()> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if is_valid {
        Ok(())
    } else {
        Err(KeyValueStoreError::InvalidKey(key.to_owned()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        validate_key(key)?;
        match self.dir.read_to_string(format!("{key}.{VALUE_EXTENSION}")) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        validate_key(key)?;
        let temp_name = format!("{key}.{TEMP_EXTENSION}");
        let final_name = format!("{key}.{VALUE_EXTENSION}");
        self.dir.write(&temp_name, value)?;
        self.dir.rename(&temp_name, &self.dir, &final_name)?;
        Ok(())
    }
}
