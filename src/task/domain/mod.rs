//! Domain model for priority-matrix task management.
//!
//! The task domain models task creation, completion toggling and quadrant
//! classification while keeping persistence and presentation outside of the
//! domain boundary.

mod classification;
mod error;
mod ids;
mod priority;
mod task;

pub use classification::{Classification, MatrixBuckets, classify};
pub use error::{ParsePriorityError, ParseViewModeError, TaskDomainError};
pub use ids::{TaskId, TaskIdAllocator};
pub use priority::{Priority, Quadrant, ViewMode};
pub use task::{Task, TaskText};
