//! Pure derivation of display buckets from the task collection.
//!
//! Nothing here is persisted: bucket membership is recomputed from
//! `(priority, completed)` on every call.

use super::{Quadrant, Task, ViewMode};

/// Incomplete tasks split by priority, plus every completed task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixBuckets<'a> {
    urgent_important: Vec<&'a Task>,
    important_not_urgent: Vec<&'a Task>,
    later: Vec<&'a Task>,
    completed: Vec<&'a Task>,
}

impl<'a> MatrixBuckets<'a> {
    /// Partitions `tasks` into the four quadrants, preserving relative order.
    #[must_use]
    pub fn partition(tasks: &'a [Task]) -> Self {
        let mut buckets = Self::default();
        for task in tasks {
            buckets.slot_mut(Quadrant::of(task)).push(task);
        }
        buckets
    }

    /// Returns the tasks in the given quadrant.
    #[must_use]
    pub fn bucket(&self, quadrant: Quadrant) -> &[&'a Task] {
        match quadrant {
            Quadrant::UrgentImportant => self.urgent_important.as_slice(),
            Quadrant::ImportantNotUrgent => self.important_not_urgent.as_slice(),
            Quadrant::Later => self.later.as_slice(),
            Quadrant::Completed => self.completed.as_slice(),
        }
    }

    /// Iterates over all quadrants in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &[&'a Task])> {
        Quadrant::ALL
            .into_iter()
            .map(move |quadrant| (quadrant, self.bucket(quadrant)))
    }

    /// Returns the number of tasks across all quadrants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urgent_important.len()
            + self.important_not_urgent.len()
            + self.later.len()
            + self.completed.len()
    }

    /// Returns whether every quadrant is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    const fn slot_mut(&mut self, quadrant: Quadrant) -> &mut Vec<&'a Task> {
        match quadrant {
            Quadrant::UrgentImportant => &mut self.urgent_important,
            Quadrant::ImportantNotUrgent => &mut self.important_not_urgent,
            Quadrant::Later => &mut self.later,
            Quadrant::Completed => &mut self.completed,
        }
    }
}

/// Tasks arranged for one view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Four-bucket matrix.
    Matrix(MatrixBuckets<'a>),
    /// Every task in collection order, most recent first.
    List(Vec<&'a Task>),
}

impl<'a> Classification<'a> {
    /// Returns the view mode this classification was derived for.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        match self {
            Self::Matrix(_) => ViewMode::Matrix,
            Self::List(_) => ViewMode::List,
        }
    }

    /// Returns the matrix buckets, if this is a matrix classification.
    #[must_use]
    pub const fn as_matrix(&self) -> Option<&MatrixBuckets<'a>> {
        match self {
            Self::Matrix(buckets) => Some(buckets),
            Self::List(_) => None,
        }
    }

    /// Returns the flat list, if this is a list classification.
    #[must_use]
    pub fn as_list(&self) -> Option<&[&'a Task]> {
        match self {
            Self::Matrix(_) => None,
            Self::List(tasks) => Some(tasks.as_slice()),
        }
    }

    /// Iterates over every classified task, bucket by bucket in matrix mode.
    pub fn tasks(&self) -> Box<dyn Iterator<Item = &'a Task> + '_> {
        match self {
            Self::Matrix(buckets) => Box::new(
                buckets
                    .iter()
                    .flat_map(|(_, bucket)| bucket.iter().copied()),
            ),
            Self::List(tasks) => Box::new(tasks.iter().copied()),
        }
    }
}

/// Classifies `tasks` for display in `view_mode`.
#[must_use]
pub fn classify(tasks: &[Task], view_mode: ViewMode) -> Classification<'_> {
    match view_mode {
        ViewMode::Matrix => Classification::Matrix(MatrixBuckets::partition(tasks)),
        ViewMode::List => Classification::List(tasks.iter().collect()),
    }
}
