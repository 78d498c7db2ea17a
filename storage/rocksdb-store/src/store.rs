use std::{marker::PhantomData, path::Path, sync::Arc};

use appreg_state_space::StateSpace;
use appreg_storage_types::{ReadStore, Store};
use rocksdb::{ColumnFamily, DB, WriteOptions};
use tap::Tap;

use crate::{
    column_family::{cf_name, descriptors},
    config::{Config, DefaultConfig},
    write_batch::WriteBatch,
};

/// Registry state persisted in RocksDB, one column family per [`StateSpace`].
///
/// Clones share the same database handle.
pub struct RocksDbStore<C: Config = DefaultConfig> {
    db: Arc<DB>,
    write_opts: Arc<WriteOptions>,
    _marker: PhantomData<C>,
}

impl<C: Config> RocksDbStore<C> {
    /// Opens (or creates) the database at `path` with all registry column families.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rocksdb::Error> {
        let db_opts = C::db_opts().tap_mut(|o| {
            o.create_if_missing(true);
            o.create_missing_column_families(true);
        });
        let db = DB::open_cf_descriptors(&db_opts, path, descriptors::<C>())?;

        Ok(Self { db: Arc::new(db), write_opts: Arc::new(C::write_opts()), _marker: PhantomData })
    }

    // the column families are created on open, a missing one means the handle is broken
    fn cf(&self, state_space: StateSpace) -> &ColumnFamily {
        let Some(cf) = self.db.cf_handle(cf_name(state_space)) else {
            panic!("missing column family '{}'", cf_name(state_space))
        };
        cf
    }
}

impl<C: Config> ReadStore for RocksDbStore<C> {
    type StateSpace = StateSpace;

    fn get(&self, state_space: StateSpace, key: &[u8]) -> Option<Vec<u8>> {
        match self.db.get_cf(self.cf(state_space), key) {
            Ok(value) => value,
            Err(err) => panic!("rocksdb read from '{}' failed: {err}", cf_name(state_space)),
        }
    }
}

impl<C: Config> Store for RocksDbStore<C> {
    type WriteBatch = WriteBatch;

    fn write_batch(&self) -> WriteBatch {
        WriteBatch::default()
    }

    fn commit(&self, write_batch: WriteBatch) {
        let mut batch = rocksdb::WriteBatch::default();
        for (state_space, key, value) in write_batch.into_puts() {
            batch.put_cf(self.cf(state_space), key, value);
        }

        if let Err(err) = self.db.write_opt(batch, &self.write_opts) {
            panic!("rocksdb commit failed: {err}");
        }
    }
}

impl<C: Config> Clone for RocksDbStore<C> {
    fn clone(&self) -> Self {
        Self { db: self.db.clone(), write_opts: self.write_opts.clone(), _marker: PhantomData }
    }
}
