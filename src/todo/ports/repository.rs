//! Repository port for list and task persistence.

use crate::todo::domain::{ListId, ListName, Task, TaskId, TaskName, TodoList};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Row counts removed by a cascading list delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Number of task rows removed.
    pub tasks_removed: usize,
    /// Number of list rows removed (zero or one).
    pub lists_removed: usize,
}

/// List and task persistence contract.
///
/// Implementations assign identifiers, return rows in insertion order, and
/// never reuse an identifier once handed out.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every list in insertion order.
    async fn all_lists(&self) -> TodoRepositoryResult<Vec<TodoList>>;

    /// Returns every task in insertion order, across all lists.
    async fn all_tasks(&self) -> TodoRepositoryResult<Vec<Task>>;

    /// Inserts a list and returns the stored row.
    async fn insert_list(&self, name: &ListName) -> TodoRepositoryResult<TodoList>;

    /// Inserts a task under `list_id` and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ListNotFound`] when no list with
    /// `list_id` exists at insert time.
    async fn insert_task(&self, name: &TaskName, list_id: ListId)
    -> TodoRepositoryResult<Task>;

    /// Deletes one task and returns the number of rows removed.
    ///
    /// A missing task removes zero rows and is not an error.
    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<usize>;

    /// Deletes every task owned by `list_id` and returns the number removed.
    async fn delete_tasks_for_list(&self, list_id: ListId) -> TodoRepositoryResult<usize>;

    /// Deletes the list row only and returns the number of rows removed.
    ///
    /// Callers must remove owned tasks first.
    async fn delete_list(&self, id: ListId) -> TodoRepositoryResult<usize>;

    /// Deletes owned tasks and then the list as one atomic unit.
    async fn delete_list_cascading(&self, id: ListId) -> TodoRepositoryResult<CascadeOutcome>;
}

/// Errors returned by to-do repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The list referenced by a new task no longer exists.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
