//! Backend lifecycle behavior through the transaction seam.

use trellis_tests::prelude::*;

fn start_on<M: StoreManager>(manager: M) -> GraphTransaction<M::Transaction> {
    let graph = TestGraph::new(manager);
    TransactionBuilder::new(&GraphConfig::default())
        .start(&graph)
        .unwrap()
}

#[test]
fn test_lifecycle_calls_reach_the_backend_in_order() {
    // GIVEN
    let mut tx = start_on(MemoryStoreManager::default());

    // WHEN
    tx.store_mut().flush().unwrap();
    tx.store_mut().flush().unwrap();
    tx.commit().unwrap();

    // THEN
    assert_eq!(
        tx.store().calls(),
        &[
            LifecycleCall::Flush,
            LifecycleCall::Flush,
            LifecycleCall::Commit
        ]
    );
}

#[test]
fn test_flush_does_not_end_the_transaction() {
    // GIVEN
    let mut tx = start_on(MemoryStoreManager::default());

    // WHEN flush is followed by a terminal call
    tx.store_mut().flush().unwrap();
    let result = tx.commit();

    // THEN both are accepted
    assert!(result.is_ok());
}

#[test]
fn test_commit_failure_reaches_the_caller_unchanged() {
    // GIVEN a backend whose write path is broken
    let mut tx = start_on(FailingStoreManager::default());

    // WHEN
    let result = tx.commit();

    // THEN the backend's own error arrives untranslated
    match result {
        Err(StorageError::Temporary(message)) => {
            assert_eq!(message, "injected commit failure");
        }
        other => panic!("expected a temporary storage failure, got {other:?}"),
    }
}

#[test]
fn test_flush_failure_reaches_the_caller_unchanged() {
    // GIVEN
    let mut tx = start_on(FailingStoreManager::default());

    // WHEN
    let result = tx.store_mut().flush();

    // THEN
    assert!(matches!(result, Err(StorageError::Temporary(_))));
}

#[test]
fn test_rollback_still_succeeds_on_a_broken_write_path() {
    // GIVEN
    let mut tx = start_on(FailingStoreManager::default());

    // WHEN / THEN
    assert!(tx.rollback().is_ok());
}

#[test]
fn test_backend_timestamp_slot_is_writable_through_the_trait() {
    // GIVEN
    let mut tx = start_on(MemoryStoreManager::default());

    // WHEN the backend assigns its own commit timestamp
    tx.store_mut().set_timestamp(7);

    // THEN
    assert_eq!(tx.store().timestamp(), 7);
}

#[test]
fn test_snapshot_is_shared_not_copied() {
    // GIVEN
    let tx = start_on(MemoryStoreManager::default());

    // THEN the graph handle and the backend read the same frozen snapshot
    assert!(std::ptr::eq(
        tx.configuration(),
        tx.store().configuration()
    ));
}
