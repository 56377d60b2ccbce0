//! Service layer translating list and task intents into repository calls.

use crate::todo::{
    domain::{
        Collection, ListId, ListName, ListSelection, Task, TaskId, TaskName, TodoDomainError,
        TodoList,
    },
    ports::{CascadeOutcome, TodoRepository, TodoRepositoryError},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// How a list delete removes the list's tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Tasks and list are removed in a single transaction.
    #[default]
    Atomic,
    /// Tasks are removed first and the list afterwards, as two separate
    /// operations. A failure between them leaves an empty list behind.
    Sequential,
}

impl DeletePolicy {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::Sequential => "sequential",
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a delete policy from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown delete policy: {0}")]
pub struct ParseDeletePolicyError(pub String);

impl FromStr for DeletePolicy {
    type Err = ParseDeletePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "atomic" => Ok(Self::Atomic),
            "sequential" => Ok(Self::Sequential),
            _ => Err(ParseDeletePolicyError(value.to_owned())),
        }
    }
}

/// Which of the two failure kinds an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoErrorKind {
    /// Input failed a precondition before any storage access.
    Validation,
    /// The storage call itself failed.
    Query,
}

/// Service-level errors for list and task operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input validation failed; no storage call was made.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),
    /// The repository operation failed.
    #[error(transparent)]
    Query(#[from] TodoRepositoryError),
}

impl TodoServiceError {
    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> TodoErrorKind {
        match self {
            Self::Validation(_) => TodoErrorKind::Validation,
            Self::Query(_) => TodoErrorKind::Query,
        }
    }
}

/// Result type for to-do service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Rows of one collection, as returned by [`TodoService::list_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionRows {
    /// Every list row.
    Lists(Vec<TodoList>),
    /// Every task row.
    Tasks(Vec<Task>),
}

impl CollectionRows {
    /// Returns the collection the rows belong to.
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Lists(_) => Collection::Lists,
            Self::Tasks(_) => Collection::Tasks,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Lists(rows) => rows.len(),
            Self::Tasks(rows) => rows.len(),
        }
    }

    /// Returns `true` when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// List and task persistence service.
///
/// The service validates input before touching storage and owns the
/// cascading-delete policy. It keeps no state between calls.
#[derive(Clone)]
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
    delete_policy: DeletePolicy,
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a service using [`DeletePolicy::Atomic`].
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            delete_policy: DeletePolicy::default(),
        }
    }

    /// Sets the list delete policy.
    #[must_use]
    pub const fn with_delete_policy(mut self, delete_policy: DeletePolicy) -> Self {
        self.delete_policy = delete_policy;
        self
    }

    /// Returns the configured list delete policy.
    #[must_use]
    pub const fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    /// Returns every list in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] when storage cannot be read.
    pub async fn list_lists(&self) -> TodoServiceResult<Vec<TodoList>> {
        Ok(self.repository.all_lists().await?)
    }

    /// Returns every task across all lists in insertion order.
    ///
    /// Filtering by list is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] when storage cannot be read.
    pub async fn list_tasks(&self) -> TodoServiceResult<Vec<Task>> {
        Ok(self.repository.all_tasks().await?)
    }

    /// Returns every row of `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] when storage cannot be read.
    pub async fn list_all(&self, collection: Collection) -> TodoServiceResult<CollectionRows> {
        match collection {
            Collection::Lists => Ok(CollectionRows::Lists(self.list_lists().await?)),
            Collection::Tasks => Ok(CollectionRows::Tasks(self.list_tasks().await?)),
        }
    }

    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the name is blank, without
    /// touching storage, or [`TodoServiceError::Query`] when the insert fails.
    pub async fn create_list(&self, name: &str) -> TodoServiceResult<TodoList> {
        let list_name = ListName::new(name)?;
        let list = self.repository.insert_list(&list_name).await?;
        tracing::info!(list_id = %list.id(), "list created");
        Ok(list)
    }

    /// Creates a task in the selected list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the name is blank or no
    /// list is selected, without touching storage. Returns
    /// [`TodoServiceError::Query`] when the list no longer exists or the insert
    /// fails.
    pub async fn create_task(
        &self,
        name: &str,
        selection: ListSelection,
    ) -> TodoServiceResult<Task> {
        let task_name = TaskName::new(name)?;
        let list_id = selection.require()?;
        let task = self.repository.insert_task(&task_name, list_id).await?;
        tracing::info!(task_id = %task.id(), list_id = %list_id, "task created");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Deleting a task that does not exist succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] on storage failure.
    pub async fn delete_task(&self, id: TaskId) -> TodoServiceResult<()> {
        let removed = self.repository.delete_task(id).await?;
        tracing::info!(task_id = %id, removed, "task deleted");
        Ok(())
    }

    /// Deletes a list together with all of its tasks.
    ///
    /// Tasks are always removed before, or atomically with, the list row.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] on storage failure. Under
    /// [`DeletePolicy::Sequential`] a failure of the list-row delete is
    /// reported even though the tasks are already gone; retrying completes
    /// the delete.
    pub async fn delete_list(&self, id: ListId) -> TodoServiceResult<CascadeOutcome> {
        let outcome = match self.delete_policy {
            DeletePolicy::Atomic => self.repository.delete_list_cascading(id).await?,
            DeletePolicy::Sequential => self.delete_list_sequentially(id).await?,
        };
        tracing::info!(
            list_id = %id,
            tasks_removed = outcome.tasks_removed,
            lists_removed = outcome.lists_removed,
            policy = %self.delete_policy,
            "list deleted"
        );
        Ok(outcome)
    }

    async fn delete_list_sequentially(
        &self,
        id: ListId,
    ) -> Result<CascadeOutcome, TodoRepositoryError> {
        let tasks_removed = self.repository.delete_tasks_for_list(id).await?;
        let lists_removed = self.repository.delete_list(id).await.inspect_err(|err| {
            tracing::warn!(
                list_id = %id,
                tasks_removed,
                error = %err,
                "list tasks removed but list row delete failed"
            );
        })?;
        Ok(CascadeOutcome {
            tasks_removed,
            lists_removed,
        })
    }
}
