//! Insert and read tests against the `SQLite` repository.

use super::helpers::{insert_list, insert_task, repo};
use listkeeper::todo::{
    adapters::sqlite::SqliteTodoRepository,
    domain::ListId,
    ports::{TodoRepository, TodoRepositoryError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fresh_database_is_empty(repo: SqliteTodoRepository) -> Result<(), eyre::Report> {
    eyre::ensure!(repo.all_lists().await?.is_empty(), "expected no lists");
    eyre::ensure!(repo.all_tasks().await?.is_empty(), "expected no tasks");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lists_are_read_back_in_insertion_order(
    repo: SqliteTodoRepository,
) -> Result<(), eyre::Report> {
    let work = insert_list(&repo, "Work").await?;
    let home = insert_list(&repo, "  Home ").await?;

    let lists = repo.all_lists().await?;

    assert_eq!(lists, vec![work, home.clone()]);
    assert_eq!(home.name().as_str(), "Home");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_keep_their_owning_list(repo: SqliteTodoRepository) -> Result<(), eyre::Report> {
    let groceries = insert_list(&repo, "Groceries").await?;
    let chores = insert_list(&repo, "Chores").await?;
    let milk = insert_task(&repo, "Milk", groceries.id()).await?;
    let sweep = insert_task(&repo, "Sweep", chores.id()).await?;
    let eggs = insert_task(&repo, "Eggs", groceries.id()).await?;

    let tasks = repo.all_tasks().await?;

    assert_eq!(tasks, vec![milk, sweep, eggs]);
    let grocery_names: Vec<&str> = tasks
        .iter()
        .filter(|task| task.belongs_to(groceries.id()))
        .map(|task| task.name().as_str())
        .collect();
    assert_eq!(grocery_names, vec!["Milk", "Eggs"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_for_missing_list_is_rejected(
    repo: SqliteTodoRepository,
) -> Result<(), eyre::Report> {
    let result = insert_task(&repo, "Orphan", ListId::from_raw(77)).await;

    let err = result.expect_err("insert should fail");
    assert!(matches!(
        err.downcast_ref::<TodoRepositoryError>(),
        Some(TodoRepositoryError::ListNotFound(id)) if *id == ListId::from_raw(77)
    ));
    eyre::ensure!(repo.all_tasks().await?.is_empty(), "no task row expected");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_twice_removes_one_row(
    repo: SqliteTodoRepository,
) -> Result<(), eyre::Report> {
    let list = insert_list(&repo, "Home").await?;
    let task = insert_task(&repo, "Vacuum", list.id()).await?;

    assert_eq!(repo.delete_task(task.id()).await?, 1);
    assert_eq!(repo.delete_task(task.id()).await?, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn names_with_quotes_are_stored_verbatim(
    repo: SqliteTodoRepository,
) -> Result<(), eyre::Report> {
    let list = insert_list(&repo, "Bob's \"stuff\"; DROP TABLE lists").await?;

    let lists = repo.all_lists().await?;

    assert_eq!(lists, vec![list]);
    assert_eq!(
        lists.first().map(|stored| stored.name().as_str()),
        Some("Bob's \"stuff\"; DROP TABLE lists")
    );
    Ok(())
}
