//! Change notification port for task collection mutations.

use crate::task::domain::TaskId;

/// A single accepted mutation of the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    /// A task was created and placed at the head of the collection.
    Created(TaskId),
    /// A task's completion flag was flipped.
    Toggled {
        /// Identifier of the toggled task.
        id: TaskId,
        /// Completion flag after the toggle.
        completed: bool,
    },
    /// A task was removed.
    Deleted(TaskId),
}

/// Receives a notification after every accepted mutation, in the order the
/// mutations were applied.
#[cfg_attr(test, mockall::automock)]
pub trait TaskObserver {
    /// Called once the mutation has been applied and written through.
    fn task_changed(&self, change: TaskChange);
}
