//! Controller translating user intents into repository operations.

use mockable::Clock;

use crate::task::{
    domain::{Classification, Priority, Task, TaskId, ViewMode, classify},
    ports::{KeyValueStore, RenderView, Renderer},
    services::repository::TaskRepository,
};

/// Mediates renderer intents.
///
/// Holds only the active view mode, the draft input and the priority
/// selected for new tasks. The renderer is redrawn after every intent that
/// changes visible state.
pub struct TaskController<S, C, R>
where
    S: KeyValueStore,
    C: Clock,
    R: Renderer,
{
    repository: TaskRepository<S, C>,
    renderer: R,
    view_mode: ViewMode,
    draft: String,
    priority: Priority,
}

impl<S, C, R> TaskController<S, C, R>
where
    S: KeyValueStore,
    C: Clock,
    R: Renderer,
{
    /// Creates a controller in matrix mode with an empty draft and medium
    /// priority selected.
    #[must_use]
    pub fn new(repository: TaskRepository<S, C>, renderer: R) -> Self {
        Self {
            repository,
            renderer,
            view_mode: ViewMode::default(),
            draft: String::new(),
            priority: Priority::default(),
        }
    }

    /// Replaces the draft input text.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Creates a task from the draft and the selected priority.
    ///
    /// On success the draft is cleared. A blank draft is ignored and left
    /// untouched.
    pub fn submit(&mut self) -> Option<TaskId> {
        let draft = self.draft.clone();
        let id = self.create(&draft, self.priority)?;
        self.draft.clear();
        Some(id)
    }

    /// Creates a task directly, leaving the draft untouched.
    ///
    /// Blank text is ignored.
    pub fn add_task(&mut self, text: &str, priority: Priority) -> Option<TaskId> {
        self.create(text, priority)
    }

    /// Flips the completion flag of a task. Unknown identifiers are ignored.
    pub fn toggle_task(&mut self, id: TaskId) {
        if self.repository.toggle_completion(id) {
            self.refresh();
        }
    }

    /// Deletes a task. Unknown identifiers are ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.repository.delete(id) {
            self.refresh();
        }
    }

    /// Switches the view mode. View mode is never persisted.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
        self.refresh();
    }

    /// Selects the priority for subsequently created tasks.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Redraws the renderer from current state.
    pub fn refresh(&mut self) {
        let tasks = self.repository.all();
        let view = RenderView {
            tasks,
            classification: classify(tasks, self.view_mode),
            view_mode: self.view_mode,
        };
        self.renderer.render(&view);
    }

    /// Returns the active view mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Returns the draft input text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Returns the priority selected for new tasks.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task collection, most recent first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.repository.all()
    }

    /// Classifies the collection for the active view mode.
    #[must_use]
    pub fn classification(&self) -> Classification<'_> {
        classify(self.repository.all(), self.view_mode)
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &TaskRepository<S, C> {
        &self.repository
    }

    /// Returns the renderer.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    fn create(&mut self, text: &str, priority: Priority) -> Option<TaskId> {
        let task = self.repository.create(text, priority).ok()?;
        self.refresh();
        Some(task.id())
    }
}
