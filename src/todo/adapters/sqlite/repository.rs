//! `SQLite` repository implementation for list and task storage.

use super::{
    connection::TodoSqlitePool,
    models::{ListRow, NewListRow, NewTaskRow, TaskRow},
    schema::{lists, tasks},
};
use crate::todo::{
    domain::{ListId, ListName, PersistedTaskData, Task, TaskId, TaskName, TodoList},
    ports::{CascadeOutcome, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;

/// `SQLite`-backed list and task repository.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: TodoSqlitePool,
}

impl SqliteTodoRepository {
    /// Creates a new repository from a pool whose database already carries
    /// the `lists` and `tasks` tables.
    #[must_use]
    pub const fn new(pool: TodoSqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

impl From<DieselError> for TodoRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn all_lists(&self) -> TodoRepositoryResult<Vec<TodoList>> {
        self.run_blocking(|connection| {
            let rows = lists::table
                .order(lists::id.asc())
                .select(ListRow::as_select())
                .load::<ListRow>(connection)?;
            Ok(rows.into_iter().map(row_to_list).collect())
        })
        .await
    }

    async fn all_tasks(&self) -> TodoRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn insert_list(&self, name: &ListName) -> TodoRepositoryResult<TodoList> {
        let list_name = name.clone();
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(lists::table)
                .values(&NewListRow {
                    name: list_name.as_str(),
                })
                .returning(ListRow::as_returning())
                .get_result::<ListRow>(connection)?;
            Ok(row_to_list(row))
        })
        .await
    }

    async fn insert_task(
        &self,
        name: &TaskName,
        list_id: ListId,
    ) -> TodoRepositoryResult<Task> {
        let task_name = name.clone();
        self.run_blocking(move |connection| {
            // The existence check and the insert share one transaction so a
            // concurrent list delete cannot leave an orphaned task behind.
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                let owner = lists::table
                    .filter(lists::id.eq(list_id.value()))
                    .select(lists::id)
                    .first::<i64>(tx)
                    .optional()?;
                if owner.is_none() {
                    return Err(TodoRepositoryError::ListNotFound(list_id));
                }

                let row = diesel::insert_into(tasks::table)
                    .values(&NewTaskRow {
                        name: task_name.as_str(),
                        list_id: list_id.value(),
                    })
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)?;
                Ok(row_to_task(row))
            })
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            Ok(diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)?)
        })
        .await
    }

    async fn delete_tasks_for_list(&self, list_id: ListId) -> TodoRepositoryResult<usize> {
        self.run_blocking(move |connection| delete_owned_tasks(connection, list_id))
            .await
    }

    async fn delete_list(&self, id: ListId) -> TodoRepositoryResult<usize> {
        self.run_blocking(move |connection| delete_list_row(connection, id))
            .await
    }

    async fn delete_list_cascading(&self, id: ListId) -> TodoRepositoryResult<CascadeOutcome> {
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                let tasks_removed = delete_owned_tasks(tx, id)?;
                let lists_removed = delete_list_row(tx, id)?;
                Ok(CascadeOutcome {
                    tasks_removed,
                    lists_removed,
                })
            })
        })
        .await
    }
}

fn delete_owned_tasks(
    connection: &mut SqliteConnection,
    list_id: ListId,
) -> TodoRepositoryResult<usize> {
    Ok(diesel::delete(tasks::table.filter(tasks::list_id.eq(list_id.value())))
        .execute(connection)?)
}

fn delete_list_row(connection: &mut SqliteConnection, id: ListId) -> TodoRepositoryResult<usize> {
    Ok(diesel::delete(lists::table.filter(lists::id.eq(id.value()))).execute(connection)?)
}

fn row_to_list(row: ListRow) -> TodoList {
    let ListRow { id, name } = row;
    TodoList::from_persisted(ListId::from_raw(id), ListName::from_persisted(name))
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow { id, name, list_id } = row;
    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_raw(id),
        name: TaskName::from_persisted(name),
        list_id: ListId::from_raw(list_id),
    })
}
