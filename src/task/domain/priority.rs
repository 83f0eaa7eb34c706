//! Priority levels and the quadrants they classify into.

use super::{ParsePriorityError, ParseViewModeError, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority assigned to a task at creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Urgent and important.
    High,
    /// Important but not urgent.
    #[default]
    Medium,
    /// Neither urgent nor important.
    Low,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Returns the matrix quadrant an incomplete task of this priority
    /// belongs to.
    #[must_use]
    pub const fn quadrant(self) -> Quadrant {
        match self {
            Self::High => Quadrant::UrgentImportant,
            Self::Medium => Quadrant::ImportantNotUrgent,
            Self::Low => Quadrant::Later,
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four matrix buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Incomplete high-priority tasks.
    UrgentImportant,
    /// Incomplete medium-priority tasks.
    ImportantNotUrgent,
    /// Incomplete low-priority tasks.
    Later,
    /// Every completed task, whatever its priority.
    Completed,
}

impl Quadrant {
    /// Every quadrant in display order.
    pub const ALL: [Self; 4] = [
        Self::UrgentImportant,
        Self::ImportantNotUrgent,
        Self::Later,
        Self::Completed,
    ];

    /// Returns the quadrant a task belongs to.
    ///
    /// Completion wins over priority.
    #[must_use]
    pub const fn of(task: &Task) -> Self {
        if task.is_completed() {
            Self::Completed
        } else {
            task.priority().quadrant()
        }
    }

    /// Returns the stable label for this quadrant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UrgentImportant => "urgent-important",
            Self::ImportantNotUrgent => "important-not-urgent",
            Self::Later => "later",
            Self::Completed => "completed",
        }
    }

    /// Returns the short action hint shown alongside the quadrant.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::UrgentImportant => "do it now",
            Self::ImportantNotUrgent => "schedule it",
            Self::Later => "delegate or batch",
            Self::Completed => "celebrate",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display mode selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Four classified buckets.
    #[default]
    Matrix,
    /// Flat most-recent-first list.
    List,
}

impl ViewMode {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
        }
    }
}

impl TryFrom<&str> for ViewMode {
    type Error = ParseViewModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "matrix" => Ok(Self::Matrix),
            "list" => Ok(Self::List),
            _ => Err(ParseViewModeError(value.to_owned())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
