mod column_family;
mod config;
mod store;
mod write_batch;

pub use config::{ACCOUNT_PREFIX_LEN, Config, DefaultConfig};
pub use store::RocksDbStore;
pub use write_batch::WriteBatch;
