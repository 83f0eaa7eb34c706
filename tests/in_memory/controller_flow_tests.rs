//! In-memory integration tests for controller intent flows.

use quadrant::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Priority, Quadrant, ViewMode},
};
use rstest::rstest;

use super::helpers::{backend, open_controller};

#[rstest]
fn matrix_and_list_views_after_two_additions(backend: InMemoryKeyValueStore) {
    let mut controller = open_controller(&backend);
    controller
        .add_task("Write report", Priority::High)
        .expect("accepted");
    controller.add_task("Buy milk", Priority::Low).expect("accepted");

    let matrix = controller.renderer().last().cloned().expect("frame");
    assert_eq!(matrix.view_mode, ViewMode::Matrix);
    assert_eq!(matrix.bucket(Quadrant::UrgentImportant), vec!["Write report"]);
    assert_eq!(matrix.bucket(Quadrant::Later), vec!["Buy milk"]);
    assert!(matrix.bucket(Quadrant::ImportantNotUrgent).is_empty());
    assert!(matrix.bucket(Quadrant::Completed).is_empty());

    controller.set_view_mode(ViewMode::List);
    let list = controller.renderer().last().cloned().expect("frame");
    assert_eq!(list.view_mode, ViewMode::List);
    assert_eq!(list.texts, vec!["Buy milk", "Write report"]);
    assert!(list.buckets.is_empty());
}

#[rstest]
fn completing_a_task_keeps_its_list_position(backend: InMemoryKeyValueStore) {
    let mut controller = open_controller(&backend);
    controller.add_task("Older", Priority::Low).expect("accepted");
    let dentist = controller
        .add_task("Call dentist", Priority::Medium)
        .expect("accepted");
    controller.add_task("Newer", Priority::High).expect("accepted");

    controller.toggle_task(dentist);
    let matrix = controller.renderer().last().cloned().expect("frame");
    assert!(matrix.bucket(Quadrant::ImportantNotUrgent).is_empty());
    assert_eq!(matrix.bucket(Quadrant::Completed), vec!["Call dentist"]);

    controller.set_view_mode(ViewMode::List);
    let list = controller.renderer().last().cloned().expect("frame");
    assert_eq!(list.texts, vec!["Newer", "Call dentist", "Older"]);
    let completed: Vec<bool> = controller
        .tasks()
        .iter()
        .map(|task| task.is_completed())
        .collect();
    assert_eq!(completed, vec![false, true, false]);
}

#[rstest]
fn draft_submission_flow(backend: InMemoryKeyValueStore) {
    let mut controller = open_controller(&backend);
    controller.set_priority(Priority::High);
    controller.set_draft("   ");
    assert!(controller.submit().is_none());

    controller.set_draft("Prepare slides");
    let id = controller.submit().expect("accepted");

    assert_eq!(controller.draft(), "");
    assert_eq!(controller.renderer().frames.len(), 1);
    assert_eq!(
        controller.repository().get(id).map(|task| task.priority()),
        Some(Priority::High)
    );
}

#[rstest]
fn view_mode_is_not_restored_on_reopen(backend: InMemoryKeyValueStore) {
    let mut controller = open_controller(&backend);
    controller.add_task("Persisted", Priority::Medium).expect("accepted");
    controller.set_view_mode(ViewMode::List);
    drop(controller);

    let reopened = open_controller(&backend);

    assert_eq!(reopened.view_mode(), ViewMode::Matrix);
    assert_eq!(reopened.tasks().len(), 1);
}
