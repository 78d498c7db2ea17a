use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use appreg_state_space::StateSpace;
use appreg_storage_types::{ReadStore, Store};

use crate::write_batch::WriteBatch;

type Entries = HashMap<(StateSpace, Vec<u8>), Vec<u8>>;

/// A process-local store. Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Arc<RwLock<Entries>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys across all state spaces.
    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReadStore for MemoryStore {
    type StateSpace = StateSpace;

    fn get(&self, state_space: StateSpace, key: &[u8]) -> Option<Vec<u8>> {
        let entries = self.0.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&(state_space, key.to_vec())).cloned()
    }
}

impl Store for MemoryStore {
    type WriteBatch = WriteBatch;

    fn write_batch(&self) -> WriteBatch {
        WriteBatch::default()
    }

    fn commit(&self, write_batch: WriteBatch) {
        // a single write guard covers the whole batch
        let mut entries = self.0.write().unwrap_or_else(PoisonError::into_inner);
        for (state_space, key, value) in write_batch.into_puts() {
            entries.insert((state_space, key), value);
        }
    }
}
