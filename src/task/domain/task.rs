//! Task entity and its validated text.

use super::{Priority, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display text of a task, trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskText(String);

impl TaskText {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyInput`] when the value is empty after
    /// trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyInput);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskText {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskText> for String {
    fn from(value: TaskText) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single work item.
///
/// The serialized form is the persisted record layout:
/// `{id, text, completed, priority, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    text: TaskText,
    completed: bool,
    priority: Priority,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, text: TaskText, priority: Priority, clock: &impl Clock) -> Self {
        Self::new_at(id, text, priority, clock.utc())
    }

    /// Creates a new, incomplete task with an explicit creation timestamp.
    #[must_use]
    pub const fn new_at(
        id: TaskId,
        text: TaskText,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flips the completion flag and returns the new value.
    pub const fn toggle_completion(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
