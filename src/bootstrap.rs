//! Startup wiring from configuration to a loaded board.
//!
//! Opening the database is blocking work: the synchronous helpers are meant
//! for startup code, and [`start`] moves them onto the blocking pool.

use crate::config::AppConfig;
use crate::todo::{
    adapters::sqlite::{SqliteSetupError, SqliteTodoRepository, apply_initial_schema, build_pool},
    board::TodoBoard,
    services::{TodoService, TodoServiceError},
};
use std::sync::Arc;
use thiserror::Error;

/// Board backed by the embedded `SQLite` database.
pub type SqliteTodoBoard = TodoBoard<SqliteTodoRepository>;

/// Errors raised while bringing the application up.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The database could not be opened or prepared.
    #[error(transparent)]
    Database(#[from] SqliteSetupError),

    /// The blocking startup task did not complete.
    #[error("startup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The first load of lists and tasks failed.
    #[error("initial load failed: {0}")]
    InitialLoad(#[from] TodoServiceError),
}

/// Opens the database, creates the schema if needed, and returns a
/// repository over it.
///
/// # Errors
///
/// Returns [`BootstrapError::Database`] when the pool cannot be built or the
/// schema cannot be applied.
pub fn open_repository(config: &AppConfig) -> Result<SqliteTodoRepository, BootstrapError> {
    let pool = build_pool(&config.pool_options())?;
    apply_initial_schema(&pool)?;
    tracing::info!(database = %config.database, "database ready");
    Ok(SqliteTodoRepository::new(pool))
}

/// Opens the repository and wraps it in a service using the configured
/// delete policy.
///
/// # Errors
///
/// See [`open_repository`].
pub fn open_service(
    config: &AppConfig,
) -> Result<TodoService<SqliteTodoRepository>, BootstrapError> {
    let repository = open_repository(config)?;
    Ok(TodoService::new(Arc::new(repository)).with_delete_policy(config.delete_policy))
}

/// Opens an empty board over the configured database.
///
/// # Errors
///
/// See [`open_repository`].
pub fn open_board(config: &AppConfig) -> Result<SqliteTodoBoard, BootstrapError> {
    Ok(TodoBoard::new(open_service(config)?))
}

/// Opens the board on the blocking pool and performs the first load.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the database cannot be opened or the
/// first load fails.
pub async fn start(config: AppConfig) -> Result<SqliteTodoBoard, BootstrapError> {
    let mut board = tokio::task::spawn_blocking(move || open_board(&config)).await??;
    board.load().await?;
    Ok(board)
}
