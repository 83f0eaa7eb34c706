//! In-memory source of truth for the task collection.

use std::sync::Arc;

use log::debug;
use mockable::Clock;

use crate::task::{
    domain::{Priority, Task, TaskDomainError, TaskId, TaskIdAllocator, TaskText},
    ports::{KeyValueStore, TaskChange, TaskObserver},
    services::persistence::TaskStore,
};

/// Ordered task collection with write-through persistence.
///
/// Tasks are kept most recent first. Every accepted mutation is saved to the
/// [`TaskStore`] and then announced to each subscribed [`TaskObserver`], in
/// the order the mutations were applied.
pub struct TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    tasks: Vec<Task>,
    ids: TaskIdAllocator,
    store: TaskStore<S>,
    clock: Arc<C>,
    observers: Vec<Arc<dyn TaskObserver>>,
}

impl<S, C> TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Opens a repository seeded from whatever `store` currently holds.
    ///
    /// A store that cannot be read is treated like an empty one. Write-through
    /// stays on, so the first mutation replaces whatever the store held once
    /// it is reachable again.
    #[must_use]
    pub fn open(store: TaskStore<S>, clock: Arc<C>) -> Self {
        let tasks = store.load();
        let ids = TaskIdAllocator::seeded(tasks.iter().map(Task::id));
        Self {
            tasks,
            ids,
            store,
            clock,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for subsequent mutations.
    pub fn subscribe(&mut self, observer: Arc<dyn TaskObserver>) {
        self.observers.push(observer);
    }

    /// Creates a task and places it at the head of the collection.
    ///
    /// No identifier is allocated when the text is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyInput`] when `text` is blank after
    /// trimming, or [`TaskDomainError::IdSpaceExhausted`] when no fresh
    /// identifier can be allocated. Neither case touches the collection.
    pub fn create(&mut self, text: &str, priority: Priority) -> Result<Task, TaskDomainError> {
        let task_text = TaskText::new(text)?;
        let now = self.clock.utc();
        let id = self.ids.next(now)?;
        let task = Task::new_at(id, task_text, priority, now);
        self.tasks.insert(0, task.clone());
        debug!("event=task_create module=task status=ok id={id} priority={priority}");
        self.commit(TaskChange::Created(id));
        Ok(task)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` without side effects when no such task exists.
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            debug!("event=task_toggle module=task status=missing id={id}");
            return false;
        };
        let completed = task.toggle_completion();
        debug!("event=task_toggle module=task status=ok id={id} completed={completed}");
        self.commit(TaskChange::Toggled { id, completed });
        true
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` without side effects when no such task exists.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            debug!("event=task_delete module=task status=missing id={id}");
            return false;
        };
        self.tasks.remove(position);
        debug!("event=task_delete module=task status=ok id={id}");
        self.commit(TaskChange::Deleted(id));
        true
    }

    /// Returns the collection, most recent first.
    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the backing task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    fn commit(&self, change: TaskChange) {
        self.store.save(&self.tasks);
        for observer in &self.observers {
            observer.task_changed(change);
        }
    }
}
