//! Explicit selection context and collection names.

use super::{ListId, TodoDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The list a task operation targets.
///
/// Task operations receive the selection as an argument instead of reading
/// shared UI state, which keeps the persistence layer free of view concerns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListSelection(Option<ListId>);

impl ListSelection {
    /// A selection with no list chosen.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// A selection targeting `list_id`.
    #[must_use]
    pub const fn of(list_id: ListId) -> Self {
        Self(Some(list_id))
    }

    /// Returns the selected list, if any.
    #[must_use]
    pub const fn list_id(self) -> Option<ListId> {
        self.0
    }

    /// Returns `true` when `list_id` is the selected list.
    #[must_use]
    pub fn is(self, list_id: ListId) -> bool {
        self.0 == Some(list_id)
    }

    /// Returns the selected list or a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NoListSelected`] when nothing is selected.
    pub fn require(self) -> Result<ListId, TodoDomainError> {
        self.0.ok_or(TodoDomainError::NoListSelected)
    }
}

impl From<Option<ListId>> for ListSelection {
    fn from(value: Option<ListId>) -> Self {
        Self(value)
    }
}

/// One of the two reloadable record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// All list rows.
    Lists,
    /// All task rows.
    Tasks,
}

impl Collection {
    /// Returns the storage table backing the collection.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Lists => "lists",
            Self::Tasks => "tasks",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
