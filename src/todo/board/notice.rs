//! User-facing notices raised by board actions.

use crate::todo::{
    domain::{Collection, TodoDomainError},
    services::{TodoErrorKind, TodoServiceError},
};
use std::fmt;

/// A user-initiated board action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardAction {
    /// Reloading the list collection.
    LoadLists,
    /// Reloading the task collection.
    LoadTasks,
    /// Creating a list.
    CreateList,
    /// Creating a task.
    CreateTask,
    /// Deleting a task.
    DeleteTask,
    /// Deleting a list and its tasks.
    DeleteList,
}

impl BoardAction {
    /// Returns the reload action for `collection`.
    #[must_use]
    pub const fn load(collection: Collection) -> Self {
        match collection {
            Collection::Lists => Self::LoadLists,
            Collection::Tasks => Self::LoadTasks,
        }
    }

    /// Returns the plain-language failure message for the action.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::LoadLists => "Failed to load lists",
            Self::LoadTasks => "Failed to load tasks",
            Self::CreateList => "Failed to create list",
            Self::CreateTask => "Failed to create task",
            Self::DeleteTask => "Failed to delete task",
            Self::DeleteList => "Failed to delete list",
        }
    }
}

/// A message the host should show to the user, blocking further input until
/// acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The input was rejected before reaching storage.
    Invalid {
        /// The action that was attempted.
        action: BoardAction,
        /// Why the input was rejected.
        reason: TodoDomainError,
    },
    /// Storage rejected or could not complete the action.
    Failed {
        /// The action that failed.
        action: BoardAction,
    },
}

impl Notice {
    /// Builds the notice for a failed service call.
    #[must_use]
    pub fn from_error(action: BoardAction, error: &TodoServiceError) -> Self {
        match error {
            TodoServiceError::Validation(reason) => Self::Invalid {
                action,
                reason: *reason,
            },
            TodoServiceError::Query(_) => Self::Failed { action },
        }
    }

    /// Returns the action the notice refers to.
    #[must_use]
    pub const fn action(&self) -> BoardAction {
        match self {
            Self::Invalid { action, .. } | Self::Failed { action } => *action,
        }
    }

    /// Returns the failure kind behind the notice.
    #[must_use]
    pub const fn kind(&self) -> TodoErrorKind {
        match self {
            Self::Invalid { .. } => TodoErrorKind::Validation,
            Self::Failed { .. } => TodoErrorKind::Query,
        }
    }

    /// Returns the text to display. Storage details are never included.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Invalid { reason, .. } => match reason {
                TodoDomainError::EmptyListName => "List name must not be empty",
                TodoDomainError::EmptyTaskName => "Task name must not be empty",
                TodoDomainError::NoListSelected => "Select a list first",
            },
            Self::Failed { action } => action.failure_message(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
