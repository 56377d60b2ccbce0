//! Connection pooling and initial schema setup for the `SQLite` adapter.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// `SQLite` connection pool type used by to-do adapters.
pub type TodoSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// SQL creating the `lists` and `tasks` tables when absent.
pub const INITIAL_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_lists_and_tasks/up.sql");

const IN_MEMORY_URL: &str = ":memory:";

/// Where the embedded database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// A private database that disappears with its connection.
    InMemory,
    /// A database file on disk, created on first open.
    File(PathBuf),
}

impl DatabaseLocation {
    /// Parses a location, treating `:memory:` as an in-memory database.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == IN_MEMORY_URL {
            Self::InMemory
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Returns the Diesel connection string.
    #[must_use]
    pub fn database_url(&self) -> String {
        match self {
            Self::InMemory => IN_MEMORY_URL.to_owned(),
            Self::File(path) => path.to_string_lossy().into_owned(),
        }
    }

    /// Returns `true` for an in-memory database.
    #[must_use]
    pub const fn is_in_memory(&self) -> bool {
        matches!(self, Self::InMemory)
    }
}

impl fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.database_url())
    }
}

/// Pool construction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlitePoolOptions {
    /// Database location.
    pub location: DatabaseLocation,
    /// Maximum number of pooled connections; forced to one in memory.
    pub max_size: u32,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl SqlitePoolOptions {
    /// Creates options with a single connection and a five second busy
    /// timeout.
    #[must_use]
    pub const fn new(location: DatabaseLocation) -> Self {
        Self {
            location,
            max_size: 1,
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the maximum pool size.
    #[must_use]
    pub const fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the busy timeout.
    #[must_use]
    pub const fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }
}

/// Errors raised while opening the embedded database.
#[derive(Debug, Error)]
pub enum SqliteSetupError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("failed to open database connection: {0}")]
    Pool(#[from] PoolError),

    /// The initial schema could not be applied.
    #[error("failed to apply initial schema: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Prepares each connection the pool opens.
///
/// An in-memory database starts empty on every new connection, so its
/// schema is created here as well.
#[derive(Debug, Clone, Copy)]
struct ConnectionSetup {
    busy_timeout: Duration,
    create_schema: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!(
                "PRAGMA busy_timeout = {};",
                self.busy_timeout.as_millis()
            ))
            .map_err(diesel::r2d2::Error::QueryError)?;
        if self.create_schema {
            connection
                .batch_execute(INITIAL_SCHEMA_SQL)
                .map_err(diesel::r2d2::Error::QueryError)?;
        }
        Ok(())
    }
}

/// Builds a connection pool for `options`.
///
/// An in-memory database exists only as long as its connection, so it is
/// pinned to one connection that never idles out or expires, and any
/// replacement connection receives the schema on open.
///
/// # Errors
///
/// Returns [`SqliteSetupError::Pool`] when the first connection cannot be
/// opened.
pub fn build_pool(options: &SqlitePoolOptions) -> Result<TodoSqlitePool, SqliteSetupError> {
    let manager = ConnectionManager::<SqliteConnection>::new(options.location.database_url());
    let setup = ConnectionSetup {
        busy_timeout: options.busy_timeout,
        create_schema: options.location.is_in_memory(),
    };
    let builder = Pool::builder().connection_customizer(Box::new(setup));

    let pool = if options.location.is_in_memory() {
        builder
            .max_size(1)
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?
    } else {
        builder.max_size(options.max_size.max(1)).build(manager)?
    };

    tracing::debug!(location = %options.location, "database pool opened");
    Ok(pool)
}

/// Creates the `lists` and `tasks` tables when they do not exist yet.
///
/// This is a blocking operation intended for startup.
///
/// # Errors
///
/// Returns [`SqliteSetupError`] when no connection is available or the DDL
/// fails.
pub fn apply_initial_schema(pool: &TodoSqlitePool) -> Result<(), SqliteSetupError> {
    let mut connection = pool.get()?;
    connection.batch_execute(INITIAL_SCHEMA_SQL)?;
    tracing::debug!("initial schema applied");
    Ok(())
}
