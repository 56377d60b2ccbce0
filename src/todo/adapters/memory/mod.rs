//! In-memory adapters for list and task persistence.

mod repository;

pub use repository::InMemoryTodoRepository;
