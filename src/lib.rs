//! Listkeeper: named to-do lists with locally persisted tasks.
//!
//! Users create lists, add tasks to the selected list, and delete either.
//! Data lives in an embedded `SQLite` database accessed through Diesel.
//!
//! # Architecture
//!
//! Listkeeper follows hexagonal architecture principles:
//!
//! - **Domain**: Validated names, identifiers, and records
//! - **Ports**: The repository trait the service depends on
//! - **Adapters**: `SQLite` and in-memory repositories
//! - **Services**: Validation, persistence calls, and the cascading delete
//! - **Board**: In-memory view state that reloads after every write
//!
//! # Modules
//!
//! - [`todo`]: Lists, tasks, and their persistence
//! - [`config`]: Environment-driven settings
//! - [`bootstrap`]: Opening the database and wiring the board
//! - [`telemetry`]: Logging setup

pub mod bootstrap;
pub mod config;
pub mod telemetry;
pub mod todo;
