//! Persisted list and task records.
//!
//! Both records are created by the storage engine and never edited in place,
//! so they only expose read accessors.

use super::{ListId, ListName, TaskId, TaskName};
use serde::{Deserialize, Serialize};

/// A named grouping that owns zero or more tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: ListId,
    name: ListName,
}

impl TodoList {
    /// Reconstructs a list from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: ListId, name: ListName) -> Self {
        Self { id, name }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the list name.
    #[must_use]
    pub const fn name(&self) -> &ListName {
        &self.name
    }
}

/// A named unit of work belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    list_id: ListId,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Identifier of the owning list.
    pub list_id: ListId,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            list_id: data.list_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the identifier of the owning list.
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Returns `true` when the task belongs to `list_id`.
    #[must_use]
    pub fn belongs_to(&self, list_id: ListId) -> bool {
        self.list_id == list_id
    }
}
