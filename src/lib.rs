//! Quadrant: a personal task manager built on the urgency/importance matrix.
//!
//! Tasks carry one of three priorities and are shown either as four
//! classified buckets or as a flat most-recent-first list. The task
//! collection lives in memory and is written through to a durable key-value
//! store after every change.
//!
//! # Architecture
//!
//! Quadrant follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task model, classification, persistence and intent handling

pub mod task;
