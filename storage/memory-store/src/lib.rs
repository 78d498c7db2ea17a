mod store;
mod write_batch;

pub use store::MemoryStore;
pub use write_batch::WriteBatch;
