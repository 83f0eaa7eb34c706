//! In-memory integration tests for the task repository.

use std::collections::HashSet;

use quadrant::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Priority, TaskId},
    ports::KeyValueStore,
    services::DEFAULT_STORE_KEY,
};
use rstest::rstest;

use super::helpers::{backend, open_repository};

#[rstest]
fn rapid_creation_yields_unique_increasing_ids(backend: InMemoryKeyValueStore) {
    let mut repository = open_repository(&backend);
    for index in 0..50 {
        repository
            .create(&format!("Task {index}"), Priority::Medium)
            .expect("create task");
    }

    let ids: Vec<TaskId> = repository.all().iter().map(|task| task.id()).collect();
    let unique: HashSet<TaskId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 50);
    assert!(ids.windows(2).all(|pair| matches!(pair, [newer, older] if newer > older)));
}

#[rstest]
fn collection_survives_reopen_in_same_session(backend: InMemoryKeyValueStore) {
    let mut repository = open_repository(&backend);
    let report = repository.create("Write report", Priority::High).expect("create");
    repository.create("Buy milk", Priority::Low).expect("create");
    assert!(repository.toggle_completion(report.id()));
    let expected = repository.all().to_vec();
    drop(repository);

    let reopened = open_repository(&backend);

    assert_eq!(reopened.all(), expected.as_slice());
}

#[rstest]
fn corrupt_blob_opens_empty_and_is_replaced(backend: InMemoryKeyValueStore) {
    backend
        .set(DEFAULT_STORE_KEY, "{{{ definitely not tasks")
        .expect("seed corrupt data");

    let mut repository = open_repository(&backend);
    assert!(repository.is_empty());

    repository.create("Fresh start", Priority::Medium).expect("create");
    let reopened = open_repository(&backend);
    assert_eq!(reopened.len(), 1);
}

#[rstest]
fn quota_exceeded_keeps_working_in_memory() {
    let backend = InMemoryKeyValueStore::with_quota(256);
    let mut repository = open_repository(&backend);

    for index in 0..10 {
        repository
            .create(&format!("A fairly long task description number {index}"), Priority::Low)
            .expect("create task");
    }

    assert_eq!(repository.len(), 10);
    let persisted = open_repository(&backend);
    assert!(persisted.len() < 10);
}
