use appreg_core_types::AccountId;
use appreg_state_space::StateSpace;
use appreg_storage_types::{ReadStore, WriteBatch};

use crate::keys::decode_len;

/// Provides type-safe operations for the AppLen state space.
///
/// AppLen maps an account to the number of application entries it owns.
/// Key layout: `account`
/// Value layout: `len.to_be_bytes()` (u64)
pub struct AppLen;

impl AppLen {
    /// Gets the number of applications of an account. Unknown accounts have none.
    pub fn get<S>(store: &S, account: &AccountId) -> std::io::Result<u64>
    where
        S: ReadStore<StateSpace = StateSpace>,
    {
        store.get(StateSpace::AppLen, account.as_bytes()).map_or(Ok(0), decode_len)
    }

    pub fn put<W>(store: &mut W, account: &AccountId, len: u64)
    where
        W: WriteBatch<StateSpace = StateSpace>,
    {
        store.put(StateSpace::AppLen, account.as_bytes(), &len.to_be_bytes());
    }
}
