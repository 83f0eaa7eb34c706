//! Presentation port.
//!
//! The renderer is an external collaborator: it reads a [`RenderView`] and
//! turns user gestures into controller intents. Nothing flows back through
//! this trait.

use crate::task::domain::{Classification, Task, ViewMode};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView<'a> {
    /// Full collection in native order, most recent first.
    pub tasks: &'a [Task],
    /// Tasks arranged for the active view mode.
    pub classification: Classification<'a>,
    /// Active view mode.
    pub view_mode: ViewMode,
}

/// Draws the task collection.
pub trait Renderer {
    /// Draws a fresh frame after any visible state change.
    fn render(&mut self, view: &RenderView<'_>);
}
