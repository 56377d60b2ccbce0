//! Persistence adapters for the to-do module.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTodoRepository`]: Thread-safe in-memory storage for
//!   tests and database-free embedding
//! - [`sqlite::SqliteTodoRepository`]: Embedded `SQLite` persistence using the
//!   Diesel ORM

pub mod memory;
pub mod sqlite;
