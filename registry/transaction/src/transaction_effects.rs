#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransactionEffects {
    /// Number of instructions that were applied.
    pub instructions: usize,
    /// Number of state entries written by the commit.
    pub writes: usize,
}
