use appreg_core_types::{AccountId, ParameterEntry};
use appreg_state_space::StateSpace;
use appreg_storage_types::{ReadStore, WriteBatch};
use borsh::BorshDeserialize;

use crate::keys::param_key;

/// Provides type-safe operations for the Param state space.
///
/// Key layout: `account || app_index.to_be_bytes() || param_index.to_be_bytes()`
/// Value layout: borsh encoded [`ParameterEntry`]
pub struct ParamEntry;

impl ParamEntry {
    pub fn get<S>(
        store: &S,
        account: &AccountId,
        app_index: u64,
        param_index: u64,
    ) -> std::io::Result<Option<ParameterEntry>>
    where
        S: ReadStore<StateSpace = StateSpace>,
    {
        store
            .get(StateSpace::Param, &param_key(account, app_index, param_index))
            .map(|bytes| ParameterEntry::try_from_slice(&bytes))
            .transpose()
    }

    /// Writes the entry at `param_index`, replacing whatever was stored there.
    pub fn put<W>(
        store: &mut W,
        account: &AccountId,
        app_index: u64,
        param_index: u64,
        entry: &ParameterEntry,
    ) -> std::io::Result<()>
    where
        W: WriteBatch<StateSpace = StateSpace>,
    {
        let key = param_key(account, app_index, param_index);
        store.put(StateSpace::Param, &key, &borsh::to_vec(entry)?);
        Ok(())
    }
}
