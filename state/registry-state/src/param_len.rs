use appreg_core_types::AccountId;
use appreg_state_space::StateSpace;
use appreg_storage_types::{ReadStore, WriteBatch};

use crate::keys::{app_key, decode_len};

/// Provides type-safe operations for the ParamLen state space.
///
/// Key layout: `account || app_index.to_be_bytes()`
/// Value layout: `len.to_be_bytes()` (u64)
pub struct ParamLen;

impl ParamLen {
    pub fn get<S>(store: &S, account: &AccountId, app_index: u64) -> std::io::Result<u64>
    where
        S: ReadStore<StateSpace = StateSpace>,
    {
        store.get(StateSpace::ParamLen, &app_key(account, app_index)).map_or(Ok(0), decode_len)
    }

    pub fn put<W>(store: &mut W, account: &AccountId, app_index: u64, len: u64)
    where
        W: WriteBatch<StateSpace = StateSpace>,
    {
        store.put(StateSpace::ParamLen, &app_key(account, app_index), &len.to_be_bytes());
    }
}
