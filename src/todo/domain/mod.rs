//! Domain model for to-do lists and their tasks.
//!
//! The domain holds validated names, storage-assigned identifiers, and the
//! explicit list selection used by task operations. Infrastructure concerns
//! stay outside this boundary.

mod error;
mod ids;
mod name;
mod records;
mod selection;

pub use error::TodoDomainError;
pub use ids::{ListId, TaskId};
pub use name::{ListName, TaskName};
pub use records::{PersistedTaskData, Task, TodoList};
pub use selection::{Collection, ListSelection};
