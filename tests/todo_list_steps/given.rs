//! Given steps for list and task BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    run_async(world.board.load()).wrap_err("load empty board")?;
    eyre::ensure!(world.board.lists().is_empty(), "board should start empty");
    Ok(())
}

#[given(r#"the list "{list}" holds the task "{task}""#)]
fn list_holds_task(world: &mut TodoWorld, list: String, task: String) -> Result<(), eyre::Report> {
    let list_id = if let Ok(existing) = world.list_id(&list) {
        existing
    } else {
        world.board.set_list_input(list.as_str());
        run_async(world.board.submit_list())
            .wrap_err("create list in scenario setup")?
            .id()
    };
    world.board.select_list(Some(list_id));
    world.board.set_task_input(task.as_str());
    run_async(world.board.submit_task()).wrap_err("create task in scenario setup")?;
    Ok(())
}
