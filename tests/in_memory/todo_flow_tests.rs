//! End-to-end flows through the board over the in-memory adapter.

use super::helpers::{MemoryBoard, add_list, add_task, board};
use listkeeper::todo::{
    board::{BoardEvent, RecordingObserver},
    domain::Collection,
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn groceries_flow_shows_tasks_for_selected_list(
    mut board: MemoryBoard,
) -> Result<(), eyre::Report> {
    let groceries = add_list(&mut board, "Groceries").await?;
    let milk = add_task(&mut board, groceries, "Milk").await?;
    add_task(&mut board, groceries, "Eggs").await?;

    let visible: Vec<String> = board
        .visible_tasks()
        .iter()
        .map(|task| task.name().to_string())
        .collect();
    assert_eq!(visible, vec!["Milk", "Eggs"]);
    assert_eq!(board.lists().len(), 1);

    board.remove_task(milk.id()).await?;
    let remaining: Vec<String> = board
        .visible_tasks()
        .iter()
        .map(|task| task.name().to_string())
        .collect();
    assert_eq!(remaining, vec!["Eggs"]);

    board.remove_list(groceries).await?;
    eyre::ensure!(board.lists().is_empty(), "Groceries should be gone");
    eyre::ensure!(board.tasks().is_empty(), "Eggs should be gone");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_work_keeps_home_intact(mut board: MemoryBoard) -> Result<(), eyre::Report> {
    let work = add_list(&mut board, "Work").await?;
    let home = add_list(&mut board, "Home").await?;
    add_task(&mut board, work, "Email").await?;
    add_task(&mut board, work, "Report").await?;
    let laundry = add_task(&mut board, home, "Laundry").await?;
    board.select_list(Some(work));

    let outcome = board.remove_list(work).await?;

    assert_eq!(outcome.tasks_removed, 2);
    assert_eq!(board.tasks(), [laundry].as_slice());
    eyre::ensure!(board.selection().list_id().is_none(), "selection not cleared");
    eyre::ensure!(
        board.lists().iter().all(|list| list.id() == home),
        "only Home should remain"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_write_reloads_what_it_touched(mut board: MemoryBoard) -> Result<(), eyre::Report> {
    let observer = Arc::new(RecordingObserver::new());
    board.add_observer(observer.clone());

    let list_id = add_list(&mut board, "Work").await?;
    let task = add_task(&mut board, list_id, "Email").await?;
    board.remove_task(task.id()).await?;

    assert_eq!(
        observer.events(),
        vec![
            BoardEvent::Reloaded(Collection::Lists),
            BoardEvent::Reloaded(Collection::Tasks),
            BoardEvent::Reloaded(Collection::Tasks),
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_input_raises_notice_without_reload(mut board: MemoryBoard) {
    let observer = Arc::new(RecordingObserver::new());
    board.add_observer(observer.clone());
    board.set_task_input("Email");

    let result = board.submit_task().await;

    assert!(result.is_err());
    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events.first(), Some(BoardEvent::Notice(_))));
}
