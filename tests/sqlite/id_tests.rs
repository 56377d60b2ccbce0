//! Identifier assignment tests.

use super::helpers::{insert_list, insert_task, repo};
use listkeeper::todo::{adapters::sqlite::SqliteTodoRepository, ports::TodoRepository};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_increase_with_each_insert(
    repo: SqliteTodoRepository,
) -> Result<(), eyre::Report> {
    let first = insert_list(&repo, "First").await?;
    let second = insert_list(&repo, "Second").await?;

    eyre::ensure!(first.id() < second.id(), "list ids should increase");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_list_ids_are_not_reused(repo: SqliteTodoRepository) -> Result<(), eyre::Report> {
    let first = insert_list(&repo, "First").await?;
    let second = insert_list(&repo, "Second").await?;
    repo.delete_list_cascading(second.id()).await?;

    let third = insert_list(&repo, "Third").await?;

    eyre::ensure!(
        third.id() > second.id(),
        "expected id above {}, got {}",
        second.id(),
        third.id()
    );
    eyre::ensure!(third.id() != first.id(), "id collided with a live row");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_ids_are_not_reused(repo: SqliteTodoRepository) -> Result<(), eyre::Report> {
    let list = insert_list(&repo, "Home").await?;
    let first = insert_task(&repo, "Dust", list.id()).await?;
    repo.delete_task(first.id()).await?;

    let second = insert_task(&repo, "Mop", list.id()).await?;

    eyre::ensure!(second.id() > first.id(), "task id was reused");
    Ok(())
}
