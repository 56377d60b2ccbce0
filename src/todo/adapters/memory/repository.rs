//! In-memory repository for to-do tests and embedding without a database.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{ListId, ListName, PersistedTaskData, Task, TaskId, TaskName, TodoList},
    ports::{CascadeOutcome, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory list and task repository.
///
/// Rows are kept in insertion order and identifiers come from monotonically
/// increasing counters, so a deleted identifier is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    lists: Vec<TodoList>,
    tasks: Vec<Task>,
    last_list_id: i64,
    last_task_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl InMemoryTodoState {
    fn remove_tasks_for_list(&mut self, list_id: ListId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.belongs_to(list_id));
        before - self.tasks.len()
    }

    fn remove_list(&mut self, id: ListId) -> usize {
        let before = self.lists.len();
        self.lists.retain(|list| list.id() != id);
        before - self.lists.len()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn all_lists(&self) -> TodoRepositoryResult<Vec<TodoList>> {
        Ok(self.read()?.lists.clone())
    }

    async fn all_tasks(&self) -> TodoRepositoryResult<Vec<Task>> {
        Ok(self.read()?.tasks.clone())
    }

    async fn insert_list(&self, name: &ListName) -> TodoRepositoryResult<TodoList> {
        let mut state = self.write()?;
        state.last_list_id += 1;
        let list = TodoList::from_persisted(ListId::from_raw(state.last_list_id), name.clone());
        state.lists.push(list.clone());
        Ok(list)
    }

    async fn insert_task(
        &self,
        name: &TaskName,
        list_id: ListId,
    ) -> TodoRepositoryResult<Task> {
        let mut state = self.write()?;
        if !state.lists.iter().any(|list| list.id() == list_id) {
            return Err(TodoRepositoryError::ListNotFound(list_id));
        }

        state.last_task_id += 1;
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::from_raw(state.last_task_id),
            name: name.clone(),
            list_id,
        });
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<usize> {
        let mut state = self.write()?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id() != id);
        Ok(before - state.tasks.len())
    }

    async fn delete_tasks_for_list(&self, list_id: ListId) -> TodoRepositoryResult<usize> {
        Ok(self.write()?.remove_tasks_for_list(list_id))
    }

    async fn delete_list(&self, id: ListId) -> TodoRepositoryResult<usize> {
        Ok(self.write()?.remove_list(id))
    }

    async fn delete_list_cascading(&self, id: ListId) -> TodoRepositoryResult<CascadeOutcome> {
        // One write guard covers both removals.
        let mut state = self.write()?;
        let tasks_removed = state.remove_tasks_for_list(id);
        let lists_removed = state.remove_list(id);
        Ok(CascadeOutcome {
            tasks_removed,
            lists_removed,
        })
    }
}
