use appreg_state_space::StateSpace;
use appreg_storage_memory_store::MemoryStore;
use appreg_storage_types::{ReadStore, Store, WriteBatch};

#[test]
pub fn test_batches_apply_on_commit() {
    let store = MemoryStore::new();
    let shared = store.clone();

    let mut batch = store.write_batch();
    batch.put(StateSpace::AppLen, b"alice", &1u64.to_be_bytes());
    batch.put(StateSpace::App, b"alice", b"entry");
    assert_eq!(batch.len(), 2);

    // nothing is visible before the commit
    assert_eq!(store.get(StateSpace::AppLen, b"alice"), None);
    assert!(store.is_empty());

    store.commit(batch);
    assert_eq!(shared.get(StateSpace::AppLen, b"alice"), Some(1u64.to_be_bytes().to_vec()));
    assert_eq!(shared.get(StateSpace::App, b"alice"), Some(b"entry".to_vec()));

    // state spaces partition the keys
    assert_eq!(shared.get(StateSpace::Param, b"alice"), None);

    // later batches overwrite in place
    let mut batch = store.write_batch();
    batch.put(StateSpace::App, b"alice", b"rewritten");
    store.commit(batch);
    assert_eq!(store.get(StateSpace::App, b"alice"), Some(b"rewritten".to_vec()));
    assert_eq!(store.len(), 2);
}

#[test]
pub fn test_dropped_batch_writes_nothing() {
    let store = MemoryStore::new();
    {
        let mut batch = store.write_batch();
        batch.put(StateSpace::ParamLen, b"bob", &3u64.to_be_bytes());
    }
    assert!(store.is_empty());
}
