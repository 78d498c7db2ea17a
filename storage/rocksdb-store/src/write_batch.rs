use appreg_state_space::StateSpace;

/// Puts collected for one commit. Column families are resolved by the store when the batch is
/// committed.
#[derive(Debug, Default)]
pub struct WriteBatch {
    puts: Vec<(StateSpace, Vec<u8>, Vec<u8>)>,
}

impl WriteBatch {
    pub fn len(&self) -> usize {
        self.puts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puts.is_empty()
    }

    pub(crate) fn into_puts(self) -> Vec<(StateSpace, Vec<u8>, Vec<u8>)> {
        self.puts
    }
}

impl appreg_storage_types::WriteBatch for WriteBatch {
    type StateSpace = StateSpace;

    fn put(&mut self, state_space: StateSpace, key: &[u8], value: &[u8]) {
        self.puts.push((state_space, key.to_vec(), value.to_vec()));
    }
}
