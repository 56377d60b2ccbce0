//! Validated display names for lists and tasks.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// List name, trimmed and non-empty when created through [`ListName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListName(String);

impl ListName {
    /// Creates a validated list name.
    ///
    /// Surrounding whitespace is removed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyListName`] when the value is empty after
    /// trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        trimmed_non_empty(value.as_ref())
            .map(Self)
            .ok_or(TodoDomainError::EmptyListName)
    }

    /// Reconstructs a name read back from storage, exactly as stored.
    ///
    /// Storage does not enforce non-empty names, so no validation happens
    /// here.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task name, trimmed and non-empty when created through [`TaskName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTaskName`] when the value is empty after
    /// trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        trimmed_non_empty(value.as_ref())
            .map(Self)
            .ok_or(TodoDomainError::EmptyTaskName)
    }

    /// Reconstructs a name read back from storage, exactly as stored.
    ///
    /// Storage does not enforce non-empty names, so no validation happens
    /// here.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn trimmed_non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
