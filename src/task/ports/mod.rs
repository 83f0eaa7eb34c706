//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod observer;
pub mod renderer;
pub mod store;

pub use observer::{TaskChange, TaskObserver};
#[cfg(test)]
pub use observer::MockTaskObserver;
pub use renderer::{RenderView, Renderer};
pub use store::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};
