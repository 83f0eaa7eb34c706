//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use quadrant::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Quadrant, TaskId, ViewMode},
    ports::{RenderView, Renderer},
    services::{TaskController, TaskRepository, TaskStore},
};
use rstest::fixture;

/// Repository type used across integration tests.
pub type Repository = TaskRepository<InMemoryKeyValueStore, DefaultClock>;

/// Controller type used across integration tests.
pub type Controller = TaskController<InMemoryKeyValueStore, DefaultClock, RecordingRenderer>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn backend() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

/// Opens a repository sharing `backend`'s entries.
pub fn open_repository(backend: &InMemoryKeyValueStore) -> Repository {
    TaskRepository::open(
        TaskStore::new(Arc::new(backend.clone())),
        Arc::new(DefaultClock),
    )
}

/// Opens a controller over a repository sharing `backend`'s entries.
pub fn open_controller(backend: &InMemoryKeyValueStore) -> Controller {
    TaskController::new(open_repository(backend), RecordingRenderer::default())
}

/// Owned copy of a rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// View mode the frame was drawn in.
    pub view_mode: ViewMode,
    /// Task texts in native order.
    pub texts: Vec<String>,
    /// Task texts per quadrant; empty in list mode.
    pub buckets: Vec<(Quadrant, Vec<String>)>,
    /// Task identifiers in native order.
    pub ids: Vec<TaskId>,
}

impl Frame {
    /// Returns the texts drawn in `quadrant`.
    #[must_use]
    pub fn bucket(&self, quadrant: Quadrant) -> Vec<String> {
        self.buckets
            .iter()
            .find(|(slot, _)| *slot == quadrant)
            .map(|(_, texts)| texts.clone())
            .unwrap_or_default()
    }
}

/// Renderer recording every frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Frames in draw order.
    pub frames: Vec<Frame>,
}

impl RecordingRenderer {
    /// Returns the most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &RenderView<'_>) {
        let buckets = view
            .classification
            .as_matrix()
            .map(|matrix| {
                matrix
                    .iter()
                    .map(|(quadrant, tasks)| {
                        (
                            quadrant,
                            tasks
                                .iter()
                                .map(|task| task.text().as_str().to_owned())
                                .collect(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.frames.push(Frame {
            view_mode: view.view_mode,
            texts: view
                .tasks
                .iter()
                .map(|task| task.text().as_str().to_owned())
                .collect(),
            buckets,
            ids: view.tasks.iter().map(|task| task.id()).collect(),
        });
    }
}
