//! Diesel row models for list and task persistence.

use super::schema::{lists, tasks};
use diesel::prelude::*;

/// Query result row for list records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = lists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListRow {
    /// List identifier.
    pub id: i64,
    /// List name.
    pub name: String,
}

/// Insert model for list records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = lists)]
pub struct NewListRow<'a> {
    /// List name.
    pub name: &'a str,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Owning list identifier.
    pub list_id: i64,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow<'a> {
    /// Task name.
    pub name: &'a str,
    /// Owning list identifier.
    pub list_id: i64,
}
