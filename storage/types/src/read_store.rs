pub trait ReadStore {
    type StateSpace;

    fn get(&self, state_space: Self::StateSpace, key: &[u8]) -> Option<Vec<u8>>;
}
