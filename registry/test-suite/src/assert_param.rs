use appreg_core_types::{AccountId, Felt};
use appreg_registry::AccountRegistry;
use appreg_state_space::StateSpace;
use appreg_storage_types::Store;

use crate::felt;

/// Expected `(param_id, param_value)` pair at `app_index`/`param_index` of an account.
pub struct AssertParam {
    pub app_index: i64,
    pub param_index: i64,
    pub param_id: Felt,
    pub param_value: Felt,
}

impl AssertParam {
    pub fn new(app_index: i64, param_index: i64, param_id: &str, param_value: &str) -> Self {
        Self { app_index, param_index, param_id: felt(param_id), param_value: felt(param_value) }
    }

    pub fn assert<S: Store<StateSpace = StateSpace>>(
        &self,
        registry: &AccountRegistry<S>,
        account: &AccountId,
    ) {
        assert_eq!(
            registry.get_app_param_value_array(account, self.app_index, self.param_index).ok(),
            Some((self.param_id, self.param_value)),
            "param@{}/{}",
            self.app_index,
            self.param_index
        );
    }
}
