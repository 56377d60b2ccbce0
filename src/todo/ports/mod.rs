//! Port contracts for list and task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the to-do service.

pub mod repository;

pub use repository::{CascadeOutcome, TodoRepository, TodoRepositoryError, TodoRepositoryResult};
