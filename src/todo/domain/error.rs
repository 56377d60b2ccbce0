//! Error types for to-do domain validation.

use thiserror::Error;

/// Errors returned while validating user input before any storage access.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The list name is empty after trimming.
    #[error("list name must not be empty")]
    EmptyListName,

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// A task operation was requested without a selected list.
    #[error("no list is selected")]
    NoListSelected,
}
