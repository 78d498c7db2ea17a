use appreg_core_types::{AccountId, ApplicationRecord, Felt, InstallFlag, ParameterEntry};
use appreg_state::{AppEntry, AppLen, ParamEntry, ParamLen, app_key, param_key};
use appreg_state_space::StateSpace;
use appreg_storage_memory_store::MemoryStore;
use appreg_storage_types::{Store, WriteBatch};

#[test]
pub fn test_typed_accessors() -> std::io::Result<()> {
    let store = MemoryStore::new();
    let account = AccountId::from(0x123456u64);
    let other = AccountId::from(0x567890u64);

    assert_eq!(AppLen::get(&store, &account)?, 0);
    assert_eq!(ParamLen::get(&store, &account, 0)?, 0);
    assert_eq!(AppEntry::get(&store, &account, 0)?, None);
    assert_eq!(ParamEntry::get(&store, &account, 0, 0)?, None);

    let record = ApplicationRecord::new(Felt::from(123u64));
    let entry = ParameterEntry::new(Felt::try_from("testkey").unwrap(), Felt::from(7u64));

    let mut batch = store.write_batch();
    AppLen::put(&mut batch, &account, 1);
    AppEntry::put(&mut batch, &account, 0, &record)?;
    ParamLen::put(&mut batch, &account, 0, 1);
    ParamEntry::put(&mut batch, &account, 0, 0, &entry)?;
    store.commit(batch);

    assert_eq!(AppLen::get(&store, &account)?, 1);
    assert_eq!(AppEntry::get(&store, &account, 0)?, Some(record));
    assert_eq!(AppEntry::get(&store, &account, 0)?.map(|r| r.installed), Some(InstallFlag::Installed));
    assert_eq!(ParamLen::get(&store, &account, 0)?, 1);
    assert_eq!(ParamEntry::get(&store, &account, 0, 0)?, Some(entry));

    // keys are scoped by account
    assert_eq!(AppLen::get(&store, &other)?, 0);
    assert_eq!(AppEntry::get(&store, &other, 0)?, None);

    Ok(())
}

#[test]
pub fn test_key_layout() {
    let account = AccountId::from(1u64);

    let key = app_key(&account, 2);
    assert_eq!(key.len(), 40);
    assert_eq!(&key[..32], account.as_bytes());
    assert_eq!(&key[32..], &2u64.to_be_bytes());

    let key = param_key(&account, 2, 3);
    assert_eq!(key.len(), 48);
    assert_eq!(&key[..40], app_key(&account, 2).as_slice());
    assert_eq!(&key[40..], &3u64.to_be_bytes());
}

#[test]
pub fn test_corrupt_values_are_reported() {
    let store = MemoryStore::new();
    let account = AccountId::from(9u64);

    let mut batch = store.write_batch();
    batch.put(StateSpace::AppLen, account.as_bytes(), &[1, 2, 3]);
    batch.put(StateSpace::App, &app_key(&account, 0), &[0xff]);
    store.commit(batch);

    assert!(AppLen::get(&store, &account).is_err());
    assert!(AppEntry::get(&store, &account, 0).is_err());
}
