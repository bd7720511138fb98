//! CQL backend behavior through the transaction seam.

use trellis_tests::prelude::*;

#[test]
fn test_builder_started_cql_transaction_uses_quorum_defaults() {
    // GIVEN a graph over the CQL backend
    let graph = TestGraph::new(CqlStoreManager::default());

    // WHEN a plain transaction is started
    let tx = TransactionBuilder::new(&GraphConfig::default())
        .start(&graph)
        .unwrap();

    // THEN both consistency levels resolve to the declared default
    assert_eq!(
        tx.store().read_consistency_level().unwrap(),
        ConsistencyLevel::Quorum
    );
    assert_eq!(
        tx.store().write_consistency_level().unwrap(),
        ConsistencyLevel::Quorum
    );
}

#[test]
fn test_explicit_consistency_entries_reach_the_accessors() {
    // GIVEN a raw configuration carrying explicit levels
    let mut storage = ConfigMap::new();
    storage.set(&READ_CONSISTENCY, "ONE".to_string());
    storage.set(&WRITE_CONSISTENCY, "ALL".to_string());
    let config = std::sync::Arc::new(TxConfig::new(
        false,
        true,
        true,
        false,
        true,
        true,
        true,
        false,
        false,
        None,
        20_000,
        None,
        TypeMakerPolicy::DefaultTypes,
        storage,
    ));

    // WHEN
    let tx = CqlStoreManager
        .begin_transaction(config)
        .unwrap();

    // THEN
    assert_eq!(tx.read_consistency_level().unwrap(), ConsistencyLevel::One);
    assert_eq!(tx.write_consistency_level().unwrap(), ConsistencyLevel::All);
}

#[test]
fn test_stamped_timestamp_reaches_the_cql_transaction() {
    // GIVEN
    let graph = TestGraph::new(CqlStoreManager::default());

    // WHEN
    let tx = TransactionBuilder::new(&GraphConfig::default())
        .set_timestamp(42)
        .start(&graph)
        .unwrap();

    // THEN
    assert_eq!(tx.store().timestamp(), 42);
}

#[test]
fn test_get_tx_distinguishes_backends_behind_the_trait() {
    // GIVEN one handle from each backend
    let cql_graph = TestGraph::new(CqlStoreManager::default());
    let noop_graph = TestGraph::new(NoOpStoreManager::default());
    let cql_tx = TransactionBuilder::new(&GraphConfig::default())
        .start(&cql_graph)
        .unwrap();
    let noop_tx = TransactionBuilder::new(&GraphConfig::default())
        .start(&noop_graph)
        .unwrap();

    // WHEN viewed through the backend-generic trait
    let cql_dyn: &dyn StoreTransaction = cql_tx.store();
    let noop_dyn: &dyn StoreTransaction = noop_tx.store();

    // THEN only the CQL handle downcasts
    assert!(CqlTransaction::get_tx(cql_dyn).is_ok());
    assert!(matches!(
        CqlTransaction::get_tx(noop_dyn),
        Err(CqlError::UnexpectedTransactionType)
    ));
}
