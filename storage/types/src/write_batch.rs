/// Registry state is append-only, so a batch only ever adds or overwrites entries.
pub trait WriteBatch {
    type StateSpace;

    fn put(&mut self, state_space: Self::StateSpace, key: &[u8], value: &[u8]);
}
