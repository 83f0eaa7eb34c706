//! Application services for task management.

pub mod controller;
pub mod persistence;
pub mod repository;

pub use controller::TaskController;
pub use persistence::{
    DEFAULT_STORE_KEY, TaskStore, TaskStoreConfig, TaskStoreError, TaskStoreResult,
};
pub use repository::TaskRepository;
