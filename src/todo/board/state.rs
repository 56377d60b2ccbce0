//! In-memory board state mirroring persisted lists and tasks.

use super::{BoardAction, BoardObserver, Notice};
use crate::todo::{
    domain::{Collection, ListId, ListSelection, Task, TaskId, TodoList},
    ports::{CascadeOutcome, TodoRepository},
    services::{CollectionRows, TodoService, TodoServiceError, TodoServiceResult},
};
use std::sync::Arc;

/// Reactive view state over a [`TodoService`].
///
/// The board mirrors both collections, owns the current list selection and
/// the two text inputs, and reloads the affected collections after every
/// successful write. Failures leave the mirrors untouched and raise a
/// [`Notice`].
pub struct TodoBoard<R>
where
    R: TodoRepository,
{
    service: TodoService<R>,
    lists: Vec<TodoList>,
    tasks: Vec<Task>,
    selection: ListSelection,
    list_input: String,
    task_input: String,
    last_notice: Option<Notice>,
    observers: Vec<Arc<dyn BoardObserver>>,
}

impl<R> TodoBoard<R>
where
    R: TodoRepository,
{
    /// Creates an empty board. Call [`Self::load`] to populate it.
    #[must_use]
    pub const fn new(service: TodoService<R>) -> Self {
        Self {
            service,
            lists: Vec::new(),
            tasks: Vec::new(),
            selection: ListSelection::none(),
            list_input: String::new(),
            task_input: String::new(),
            last_notice: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for reloads and notices.
    pub fn add_observer(&mut self, observer: Arc<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    /// Returns the underlying service.
    #[must_use]
    pub const fn service(&self) -> &TodoService<R> {
        &self.service
    }

    /// Returns the mirrored lists in insertion order.
    #[must_use]
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Returns every mirrored task, across all lists.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks of the selected list, or nothing when no list is
    /// selected.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.selection.is(task.list_id()))
            .collect()
    }

    /// Returns the current list selection.
    #[must_use]
    pub const fn selection(&self) -> ListSelection {
        self.selection
    }

    /// Selects a list, or clears the selection with `None`.
    pub fn select_list(&mut self, list_id: Option<ListId>) {
        self.selection = ListSelection::from(list_id);
    }

    /// Returns the pending list name input.
    #[must_use]
    pub fn list_input(&self) -> &str {
        &self.list_input
    }

    /// Replaces the pending list name input.
    pub fn set_list_input(&mut self, text: impl Into<String>) {
        self.list_input = text.into();
    }

    /// Returns the pending task name input.
    #[must_use]
    pub fn task_input(&self) -> &str {
        &self.task_input
    }

    /// Replaces the pending task name input.
    pub fn set_task_input(&mut self, text: impl Into<String>) {
        self.task_input = text.into();
    }

    /// Returns the most recent notice, if it has not been dismissed.
    #[must_use]
    pub const fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    /// Clears the current notice.
    pub fn dismiss_notice(&mut self) {
        self.last_notice = None;
    }

    /// Reloads both collections.
    ///
    /// # Errors
    ///
    /// Returns the first reload failure. Collections that failed to load keep
    /// their previous contents.
    pub async fn load(&mut self) -> TodoServiceResult<()> {
        let lists_result = self.reload(Collection::Lists).await;
        let tasks_result = self.reload(Collection::Tasks).await;
        lists_result.and(tasks_result)
    }

    /// Reloads one collection and notifies observers.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] when storage cannot be read; the
    /// mirror keeps its previous contents.
    pub async fn reload(&mut self, collection: Collection) -> TodoServiceResult<()> {
        let result = self.service.list_all(collection).await;
        match result {
            Ok(rows) => {
                tracing::debug!(%collection, rows = rows.len(), "collection reloaded");
                match rows {
                    CollectionRows::Lists(lists) => self.lists = lists,
                    CollectionRows::Tasks(tasks) => self.tasks = tasks,
                }
                for observer in &self.observers {
                    observer.collection_reloaded(collection);
                }
                Ok(())
            }
            Err(err) => Err(self.fail(BoardAction::load(collection), err)),
        }
    }

    /// Creates a list from the list input.
    ///
    /// On success the input is cleared and lists are reloaded. On failure the
    /// input keeps the attempted name.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError`] from the create; a failed follow-up reload
    /// only raises a notice.
    pub async fn submit_list(&mut self) -> TodoServiceResult<TodoList> {
        let result = self.service.create_list(&self.list_input).await;
        match result {
            Ok(list) => {
                self.list_input.clear();
                self.refresh(&[Collection::Lists]).await;
                Ok(list)
            }
            Err(err) => Err(self.fail(BoardAction::CreateList, err)),
        }
    }

    /// Creates a task in the selected list from the task input.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError`] from the create; a failed follow-up reload
    /// only raises a notice.
    pub async fn submit_task(&mut self) -> TodoServiceResult<Task> {
        let result = self
            .service
            .create_task(&self.task_input, self.selection)
            .await;
        match result {
            Ok(task) => {
                self.task_input.clear();
                self.refresh(&[Collection::Tasks]).await;
                Ok(task)
            }
            Err(err) => Err(self.fail(BoardAction::CreateTask, err)),
        }
    }

    /// Deletes a task and reloads tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] on storage failure.
    pub async fn remove_task(&mut self, id: TaskId) -> TodoServiceResult<()> {
        let result = self.service.delete_task(id).await;
        match result {
            Ok(()) => {
                self.refresh(&[Collection::Tasks]).await;
                Ok(())
            }
            Err(err) => Err(self.fail(BoardAction::DeleteTask, err)),
        }
    }

    /// Deletes a list with its tasks and reloads both collections.
    ///
    /// Deleting the selected list clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Query`] on storage failure, including a
    /// partially completed sequential delete.
    pub async fn remove_list(&mut self, id: ListId) -> TodoServiceResult<CascadeOutcome> {
        let result = self.service.delete_list(id).await;
        match result {
            Ok(outcome) => {
                if self.selection.is(id) {
                    self.selection = ListSelection::none();
                }
                self.refresh(&[Collection::Lists, Collection::Tasks]).await;
                Ok(outcome)
            }
            Err(err) => Err(self.fail(BoardAction::DeleteList, err)),
        }
    }

    async fn refresh(&mut self, collections: &[Collection]) {
        for collection in collections {
            // Reload failures are surfaced through their own notice.
            if let Err(err) = self.reload(*collection).await {
                tracing::debug!(%collection, error = %err, "refresh after write failed");
            }
        }
    }

    fn fail(&mut self, action: BoardAction, err: TodoServiceError) -> TodoServiceError {
        let notice = Notice::from_error(action, &err);
        tracing::warn!(?action, error = %err, "{}", notice.message());
        for observer in &self.observers {
            observer.notice_raised(&notice);
        }
        self.last_notice = Some(notice);
        err
    }
}
