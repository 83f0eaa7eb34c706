//! Identifier types for the task domain.
//!
//! Task identifiers are milliseconds since the Unix epoch at creation time,
//! so an identifier doubles as a creation timestamp. [`TaskIdAllocator`]
//! keeps them strictly increasing when two tasks are created within the
//! same millisecond or the clock steps backwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TaskDomainError;

/// Unique identifier for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a raw integer value.
    #[must_use]
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Interprets the identifier as a creation timestamp.
    ///
    /// Returns `None` when the value falls outside the representable range.
    #[must_use]
    pub fn timestamp(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocates time-derived task identifiers that never repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskIdAllocator {
    last_issued: Option<TaskId>,
}

impl TaskIdAllocator {
    /// Creates an allocator that has not issued any identifier yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_issued: None }
    }

    /// Creates an allocator that will only issue identifiers above every
    /// identifier in `existing`.
    #[must_use]
    pub fn seeded<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = TaskId>,
    {
        Self {
            last_issued: existing.into_iter().max(),
        }
    }

    /// Returns the most recently issued (or seeded) identifier.
    #[must_use]
    pub const fn last_issued(&self) -> Option<TaskId> {
        self.last_issued
    }

    /// Issues the identifier for a task created at `now`.
    ///
    /// The millisecond timestamp is used directly unless it does not exceed
    /// the last issued identifier, in which case the counter advances by one.
    /// Nothing is recorded when allocation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdSpaceExhausted`] when the next identifier
    /// would not be a representable timestamp.
    pub fn next(&mut self, now: DateTime<Utc>) -> Result<TaskId, TaskDomainError> {
        let candidate = now.timestamp_millis();
        let value = match self.last_issued {
            Some(last) if candidate <= last.0 => last.0.checked_add(1),
            _ => Some(candidate),
        };
        let id = value
            .map(TaskId)
            .filter(|id| id.timestamp().is_some())
            .ok_or(TaskDomainError::IdSpaceExhausted)?;
        self.last_issued = Some(id);
        Ok(id)
    }
}
