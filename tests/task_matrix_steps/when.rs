//! When steps for priority matrix BDD scenarios.

use super::world::TaskWorld;
use quadrant::task::domain::Priority;
use rstest_bdd_macros::when;

#[when(r#"the task "{text}" is added with priority "{priority}""#)]
fn add_task(world: &mut TaskWorld, text: String, priority: String) -> Result<(), eyre::Report> {
    let parsed = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let id = world
        .controller
        .add_task(&text, parsed)
        .ok_or_else(|| eyre::eyre!("task {text:?} was rejected"))?;
    world.ids_by_text.insert(text, id);
    Ok(())
}

#[when(r#"the task "{text}" is toggled"#)]
fn toggle_task(world: &mut TaskWorld, text: String) -> Result<(), eyre::Report> {
    let id = *world
        .ids_by_text
        .get(&text)
        .ok_or_else(|| eyre::eyre!("no task named {text:?} in scenario world"))?;
    world.controller.toggle_task(id);
    Ok(())
}

#[when(r#"the task "{text}" is deleted"#)]
fn delete_task(world: &mut TaskWorld, text: String) -> Result<(), eyre::Report> {
    let id = *world
        .ids_by_text
        .get(&text)
        .ok_or_else(|| eyre::eyre!("no task named {text:?} in scenario world"))?;
    world.controller.delete_task(id);
    Ok(())
}

#[when(r#"the draft "{draft}" is submitted"#)]
fn submit_draft(world: &mut TaskWorld, draft: String) {
    world.controller.set_draft(draft);
    let _ = world.controller.submit();
}

#[when("the tasks are loaded")]
fn load_tasks(world: &mut TaskWorld) {
    world.reload();
}
