use appreg_core_types::{AccountId, Felt, InstallFlag};
use appreg_registry::AccountRegistry;
use appreg_state_space::StateSpace;
use appreg_storage_types::Store;

/// Expected contents of the application entry at `index` of an account.
pub struct AssertApp {
    pub index: i64,
    pub app_id: Felt,
    pub installed: InstallFlag,
    pub param_count: u64,
}

impl AssertApp {
    pub fn new(index: i64, app_id: u64, installed: InstallFlag, param_count: u64) -> Self {
        Self { index, app_id: Felt::from(app_id), installed, param_count }
    }

    pub fn assert<S: Store<StateSpace = StateSpace>>(
        &self,
        registry: &AccountRegistry<S>,
        account: &AccountId,
    ) {
        let index = self.index;
        assert_eq!(
            registry.get_app_array(account, index).ok(),
            Some(self.app_id),
            "app_id@{index}"
        );
        assert_eq!(
            registry.get_app_installation(account, index).ok(),
            Some(self.installed),
            "installed@{index}"
        );
        assert_eq!(
            registry.get_app_param_count(account, index).ok(),
            Some(self.param_count),
            "param_count@{index}"
        );
    }
}

/// Asserts the full list of application entries of an account, in order.
pub fn assert_apps<S: Store<StateSpace = StateSpace>>(
    registry: &AccountRegistry<S>,
    account: &AccountId,
    apps: &[AssertApp],
) {
    assert_eq!(registry.get_app_len(account).ok(), Some(apps.len() as u64), "app_len");
    for app in apps {
        app.assert(registry, account);
    }
}
