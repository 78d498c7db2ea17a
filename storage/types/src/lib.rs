mod concat_bytes;
mod read_store;
mod store;
mod write_batch;

pub use read_store::ReadStore;
pub use store::Store;
pub use write_batch::WriteBatch;
