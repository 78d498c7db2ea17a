use crate::{ReadStore, WriteBatch};

/// A persistent key-value substrate partitioned into state spaces.
///
/// Writes only become visible through [`Store::commit`], which must apply the whole batch
/// atomically: either every put of the batch is observable afterwards, or none is.
pub trait Store: ReadStore + Clone + Send + Sync + 'static {
    type WriteBatch: WriteBatch<StateSpace = Self::StateSpace>;

    fn write_batch(&self) -> Self::WriteBatch;
    fn commit(&self, write_batch: Self::WriteBatch);
}
