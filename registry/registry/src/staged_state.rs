use std::collections::BTreeMap;

use appreg_state_space::StateSpace;
use appreg_storage_types::{ReadStore, Store, WriteBatch};
use tracing::trace;

/// Buffers the writes of a transaction on top of a store.
///
/// Reads observe the store with all staged writes applied. Nothing reaches the store until
/// [`StagedState::commit`], which hands every staged write to a single store batch. Dropping
/// the overlay discards the staged writes.
pub(crate) struct StagedState<'a, S: Store<StateSpace = StateSpace>> {
    store: &'a S,
    writes: BTreeMap<(StateSpace, Vec<u8>), Vec<u8>>,
}

impl<'a, S: Store<StateSpace = StateSpace>> StagedState<'a, S> {
    pub(crate) fn new(store: &'a S) -> Self {
        Self { store, writes: BTreeMap::new() }
    }

    /// Commits all staged writes and returns how many entries were written.
    pub(crate) fn commit(self) -> usize {
        let count = self.writes.len();
        if count == 0 {
            return 0;
        }

        let mut batch = self.store.write_batch();
        for ((state_space, key), value) in self.writes {
            batch.put(state_space, &key, &value);
        }
        self.store.commit(batch);

        trace!(count, "staged writes committed");
        count
    }
}

impl<S: Store<StateSpace = StateSpace>> ReadStore for StagedState<'_, S> {
    type StateSpace = StateSpace;

    fn get(&self, state_space: StateSpace, key: &[u8]) -> Option<Vec<u8>> {
        let staged = self.writes.get(&(state_space, key.to_vec())).cloned();
        staged.or_else(|| self.store.get(state_space, key))
    }
}

impl<S: Store<StateSpace = StateSpace>> WriteBatch for StagedState<'_, S> {
    type StateSpace = StateSpace;

    fn put(&mut self, state_space: StateSpace, key: &[u8], value: &[u8]) {
        self.writes.insert((state_space, key.to_vec()), value.to_vec());
    }
}
