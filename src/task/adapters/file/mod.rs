//! Filesystem adapters.

mod store;

pub use store::FileKeyValueStore;
