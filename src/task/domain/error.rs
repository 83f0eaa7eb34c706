//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyInput,

    /// No identifier above the last issued one maps to a valid timestamp.
    #[error("task identifier space is exhausted")]
    IdSpaceExhausted,
}

/// Error returned while parsing a priority from its storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing a view mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown view mode: {0}")]
pub struct ParseViewModeError(pub String);
