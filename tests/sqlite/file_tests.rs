//! Tests for databases stored in a file.

use super::helpers::{TempDatabase, insert_list, insert_task};
use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use listkeeper::{bootstrap::open_repository, todo::ports::TodoRepository};

#[tokio::test(flavor = "multi_thread")]
async fn rows_survive_reopening_the_file() -> Result<(), eyre::Report> {
    let database = TempDatabase::new();
    let config = database.config();

    let work = {
        let repo = open_repository(&config)?;
        let work = insert_list(&repo, "Work").await?;
        insert_task(&repo, "Email", work.id()).await?;
        work
    };

    let reopened = open_repository(&config)?;
    assert_eq!(reopened.all_lists().await?, vec![work.clone()]);
    let tasks = reopened.all_tasks().await?;
    eyre::ensure!(tasks.len() == 1, "expected one task, found {}", tasks.len());
    eyre::ensure!(
        tasks.iter().all(|task| task.belongs_to(work.id())),
        "task lost its list"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn reopening_does_not_reset_identifiers() -> Result<(), eyre::Report> {
    let database = TempDatabase::new();
    let config = database.config();

    let first = {
        let repo = open_repository(&config)?;
        let first = insert_list(&repo, "First").await?;
        repo.delete_list_cascading(first.id()).await?;
        first
    };

    let reopened = open_repository(&config)?;
    let second = insert_list(&reopened, "Second").await?;
    eyre::ensure!(second.id() > first.id(), "id reused after reopen");
    Ok(())
}

/// Writes rows straight to the file, bypassing name validation.
fn insert_raw(database: &TempDatabase, sql: &str) -> Result<(), eyre::Report> {
    let url = database
        .path()
        .to_str()
        .ok_or_else(|| eyre::eyre!("temp path is not UTF-8"))?;
    let mut connection = SqliteConnection::establish(url)?;
    connection.batch_execute(sql)?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn stored_names_are_read_back_verbatim() -> Result<(), eyre::Report> {
    let database = TempDatabase::new();
    let repo = open_repository(&database.config())?;
    insert_raw(
        &database,
        "INSERT INTO lists (name) VALUES ('Work'), (''), ('  padded  ');
         INSERT INTO tasks (name, list_id) VALUES ('   ', 1), (' Email ', 1);",
    )?;

    let list_names: Vec<String> = repo
        .all_lists()
        .await?
        .iter()
        .map(|list| list.name().to_string())
        .collect();
    let task_names: Vec<String> = repo
        .all_tasks()
        .await?
        .iter()
        .map(|task| task.name().to_string())
        .collect();

    assert_eq!(list_names, vec!["Work", "", "  padded  "]);
    assert_eq!(task_names, vec!["   ", " Email "]);
    Ok(())
}
