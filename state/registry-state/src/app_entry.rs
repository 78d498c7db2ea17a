use appreg_core_types::{AccountId, ApplicationRecord};
use appreg_state_space::StateSpace;
use appreg_storage_types::{ReadStore, WriteBatch};
use borsh::BorshDeserialize;

use crate::keys::app_key;

/// Provides type-safe operations for the App state space.
///
/// Key layout: `account || app_index.to_be_bytes()`
/// Value layout: borsh encoded [`ApplicationRecord`]
pub struct AppEntry;

impl AppEntry {
    pub fn get<S>(
        store: &S,
        account: &AccountId,
        app_index: u64,
    ) -> std::io::Result<Option<ApplicationRecord>>
    where
        S: ReadStore<StateSpace = StateSpace>,
    {
        store
            .get(StateSpace::App, &app_key(account, app_index))
            .map(|bytes| ApplicationRecord::try_from_slice(&bytes))
            .transpose()
    }

    pub fn put<W>(
        store: &mut W,
        account: &AccountId,
        app_index: u64,
        record: &ApplicationRecord,
    ) -> std::io::Result<()>
    where
        W: WriteBatch<StateSpace = StateSpace>,
    {
        store.put(StateSpace::App, &app_key(account, app_index), &borsh::to_vec(record)?);
        Ok(())
    }
}
