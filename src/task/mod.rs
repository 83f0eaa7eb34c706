//! Task management for Quadrant.
//!
//! This module covers creating, completing and deleting tasks, classifying
//! them into priority quadrants, and mirroring the collection into durable
//! storage. Presentation is left to an external [`ports::Renderer`]. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
