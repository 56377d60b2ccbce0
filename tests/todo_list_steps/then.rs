//! Then steps for list and task BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::then;

#[then("the list count is {count:usize}")]
fn list_count_is(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.lists().len();
    eyre::ensure!(actual == count, "expected {count} lists, found {actual}");
    Ok(())
}

#[then("the task count is {count:usize}")]
fn task_count_is(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.tasks().len();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then("the selected list shows {count:usize} tasks")]
fn selected_list_shows(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.visible_tasks().len();
    eyre::ensure!(
        actual == count,
        "expected {count} visible tasks, found {actual}"
    );
    Ok(())
}

#[then(r#"the task "{task}" belongs to "{list}""#)]
fn task_belongs_to(world: &TodoWorld, task: String, list: String) -> Result<(), eyre::Report> {
    let list_id = world.list_id(&list)?;
    let found = world
        .board
        .tasks()
        .iter()
        .find(|candidate| candidate.name().as_str() == task)
        .ok_or_else(|| eyre::eyre!("no task named {task}"))?;
    eyre::ensure!(found.belongs_to(list_id), "{task} is not in {list}");
    Ok(())
}

#[then("no list is selected")]
fn no_list_selected(world: &TodoWorld) -> Result<(), eyre::Report> {
    let selection = world.board.selection().list_id();
    eyre::ensure!(selection.is_none(), "expected no selection, found {selection:?}");
    Ok(())
}

#[then(r#"the notice reads "{message}""#)]
fn notice_reads(world: &TodoWorld, message: String) -> Result<(), eyre::Report> {
    let notice = world
        .board
        .last_notice()
        .ok_or_else(|| eyre::eyre!("expected a notice"))?;
    eyre::ensure!(
        notice.message() == message,
        "expected notice {message:?}, found {:?}",
        notice.message()
    );
    eyre::ensure!(world.last_error.is_some(), "action should have failed");
    Ok(())
}

#[then(r#"the task draft reads "{text}""#)]
fn task_draft_reads(world: &TodoWorld, text: String) -> Result<(), eyre::Report> {
    let draft = world.board.task_input();
    eyre::ensure!(draft == text, "expected draft {text:?}, found {draft:?}");
    Ok(())
}

#[then("no notice is shown")]
fn no_notice(world: &TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.board.last_notice().is_none(),
        "unexpected notice: {:?}",
        world.board.last_notice()
    );
    eyre::ensure!(world.last_error.is_none(), "last action failed");
    Ok(())
}
