//! Given steps for task board BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, list, run_async};
use rstest_bdd_macros::given;
use taskboard::board::{
    adapters::memory::InMemoryKeyValueStore, config::DEFAULT_STORAGE_KEY, domain::NewTask,
};

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.board.tasks().is_empty(),
        "scenario world started with tasks"
    );
    Ok(())
}

#[given(r#"the tasks "{texts}" exist"#)]
fn tasks_exist(world: &mut BoardWorld, texts: String) -> Result<(), eyre::Report> {
    for text in list(&texts) {
        run_async(world.board.create_task(NewTask::new(text)))
            .ok_or_else(|| eyre::eyre!("failed to create task {text:?}"))?;
    }
    Ok(())
}

#[given(r#"storage holding "{raw}""#)]
fn storage_holding(world: &mut BoardWorld, raw: String) {
    let store = InMemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, raw);
    *world = BoardWorld::over(Arc::new(store));
}
