//! Embedded `SQLite` adapters for list and task persistence.
//!
//! Diesel calls are synchronous, so the repository runs each one on the
//! blocking thread pool with a pooled connection.

mod connection;
mod models;
mod repository;
mod schema;

pub use connection::{
    DatabaseLocation, INITIAL_SCHEMA_SQL, SqlitePoolOptions, SqliteSetupError, TodoSqlitePool,
    apply_initial_schema, build_pool,
};
pub use repository::SqliteTodoRepository;
