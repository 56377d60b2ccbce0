//! Application services for list and task persistence.

mod persistence;

pub use persistence::{
    CollectionRows, DeletePolicy, ParseDeletePolicyError, TodoErrorKind, TodoService,
    TodoServiceError, TodoServiceResult,
};
