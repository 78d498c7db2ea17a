use appreg_state_space::StateSpace;
use appreg_storage_rocksdb_store::{ACCOUNT_PREFIX_LEN, Config, DefaultConfig, RocksDbStore};
use appreg_storage_types::{ReadStore, Store, WriteBatch};
use rocksdb::{DBCompressionType, Options};
use tap::Tap;
use tempfile::TempDir;

fn account_key(account: u8, suffix: &[u8]) -> Vec<u8> {
    [vec![account; ACCOUNT_PREFIX_LEN], suffix.to_vec()].concat()
}

#[test]
pub fn test_commit_and_reopen() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let key = account_key(1, &0u64.to_be_bytes());

    {
        let store: RocksDbStore = RocksDbStore::open(temp_dir.path()).expect("failed to open db");

        let mut batch = store.write_batch();
        for state_space in StateSpace::ALL {
            batch.put(state_space, &key, &[state_space as u8]);
        }
        assert_eq!(batch.len(), StateSpace::ALL.len());
        assert_eq!(store.get(StateSpace::App, &key), None);

        store.commit(batch);
        assert_eq!(store.get(StateSpace::App, &key), Some(vec![StateSpace::App as u8]));

        // overwrites replace the stored value in place
        let mut batch = store.write_batch();
        batch.put(StateSpace::Param, &key, b"rewritten");
        store.commit(batch);
    }

    let store: RocksDbStore = RocksDbStore::open(temp_dir.path()).expect("failed to reopen db");
    assert_eq!(store.get(StateSpace::AppLen, &key), Some(vec![StateSpace::AppLen as u8]));
    assert_eq!(store.get(StateSpace::ParamLen, &key), Some(vec![StateSpace::ParamLen as u8]));
    assert_eq!(store.get(StateSpace::Param, &key), Some(b"rewritten".to_vec()));

    // keys of another account under the same prefix length stay apart
    assert_eq!(store.get(StateSpace::Param, &account_key(2, &0u64.to_be_bytes())), None);
}

#[test]
pub fn test_custom_column_family_options() {
    struct CompressedParams;

    impl Config for CompressedParams {
        fn cf_opts(state_space: StateSpace) -> Options {
            Options::default().tap_mut(|o| {
                if state_space == StateSpace::Param {
                    o.set_compression_type(DBCompressionType::Lz4);
                }
            })
        }
    }

    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let store = RocksDbStore::<CompressedParams>::open(temp_dir.path()).expect("failed to open db");
    let key = account_key(7, &[0; 16]);

    let mut batch = store.write_batch();
    batch.put(StateSpace::Param, &key, &[42; 64]);
    store.commit(batch);
    assert_eq!(store.get(StateSpace::Param, &key), Some(vec![42; 64]));
}

#[test]
pub fn test_open_reports_errors() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let file = temp_dir.path().join("not-a-directory");
    std::fs::write(&file, b"occupied").expect("failed to create file");

    assert!(RocksDbStore::<DefaultConfig>::open(&file).is_err());
}
