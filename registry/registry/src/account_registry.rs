use appreg_core_types::{AccountId, Felt, InstallFlag};
use appreg_registry_error::RegistryResult;
use appreg_state_space::StateSpace;
use appreg_storage_types::Store;
use appreg_transaction::{Instruction, Query, QueryResult, Transaction, TransactionEffects};
use tracing::debug;

use crate::{instruction_processor::apply, reads, staged_state::StagedState};

/// Per-account registry of installed applications and their parameters.
///
/// All state lives in the wrapped store. Reads take `&self`; writes take `&mut self`, so the
/// host sequences them one at a time. Every write either commits completely or leaves the
/// store untouched.
pub struct AccountRegistry<S: Store<StateSpace = StateSpace>> {
    store: S,
}

impl<S: Store<StateSpace = StateSpace>> AccountRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_app_len(&self, account: &AccountId) -> RegistryResult<u64> {
        reads::app_len(&self.store, account)
    }

    pub fn get_app_array(&self, account: &AccountId, index: i64) -> RegistryResult<Felt> {
        reads::app_record(&self.store, account, index).map(|(_, record)| record.app_id)
    }

    pub fn get_app_installation(
        &self,
        account: &AccountId,
        index: i64,
    ) -> RegistryResult<InstallFlag> {
        reads::app_record(&self.store, account, index).map(|(_, record)| record.installed)
    }

    pub fn get_app_param_count(&self, account: &AccountId, app_index: i64) -> RegistryResult<u64> {
        reads::param_len(&self.store, account, app_index).map(|(_, len)| len)
    }

    /// Returns the `(param_id, param_value)` pair stored at `param_index`.
    pub fn get_app_param_value_array(
        &self,
        account: &AccountId,
        app_index: i64,
        param_index: i64,
    ) -> RegistryResult<(Felt, Felt)> {
        reads::param_entry(&self.store, account, app_index, param_index).map(Into::into)
    }

    pub fn add_app_id(&mut self, caller: &AccountId, app_id: Felt) -> RegistryResult<()> {
        self.execute_one(caller, Instruction::AddAppId { app_id })
    }

    pub fn toggle_install_app_by_index(
        &mut self,
        caller: &AccountId,
        index: i64,
        installed: i64,
    ) -> RegistryResult<()> {
        self.execute_one(caller, Instruction::ToggleInstallAppByIndex { index, installed })
    }

    pub fn add_param(
        &mut self,
        caller: &AccountId,
        target: &AccountId,
        app_index: i64,
        param_id: Felt,
        param_value: Felt,
    ) -> RegistryResult<()> {
        let target = *target;
        self.execute_one(caller, Instruction::AddParam { target, app_index, param_id, param_value })
    }

    pub fn set_param_at_index(
        &mut self,
        caller: &AccountId,
        target: &AccountId,
        app_index: i64,
        param_index: i64,
        param_id: Felt,
        param_value: Felt,
    ) -> RegistryResult<()> {
        let target = *target;
        self.execute_one(
            caller,
            Instruction::SetParamAtIndex { target, app_index, param_index, param_id, param_value },
        )
    }

    /// Applies all instructions of `tx` in order and commits them as one batch.
    ///
    /// Later instructions observe the effects of earlier ones. If any instruction is rejected
    /// the whole transaction is rejected and nothing is written.
    pub fn execute(&mut self, tx: &Transaction) -> RegistryResult<TransactionEffects> {
        let caller = tx.caller();
        let mut state = StagedState::new(&self.store);

        tx.instructions().iter().try_for_each(|instruction| {
            apply(&mut state, caller, instruction).inspect_err(|err| {
                debug!(%caller, instruction = instruction.name(), %err, "transaction rejected");
            })
        })?;

        let writes = state.commit();
        let instructions = tx.instructions().len();
        debug!(%caller, instructions, writes, "transaction committed");

        Ok(TransactionEffects { instructions, writes })
    }

    pub fn query(&self, query: &Query) -> RegistryResult<QueryResult> {
        match query {
            Query::GetAppLen { account } => self.get_app_len(account).map(QueryResult::Count),
            Query::GetAppArray { account, index } => {
                self.get_app_array(account, *index).map(QueryResult::AppId)
            }
            Query::GetAppInstallation { account, index } => {
                self.get_app_installation(account, *index).map(QueryResult::Installation)
            }
            Query::GetAppParamCount { account, app_index } => {
                self.get_app_param_count(account, *app_index).map(QueryResult::Count)
            }
            Query::GetAppParamValueArray { account, app_index, param_index } => {
                reads::param_entry(&self.store, account, *app_index, *param_index)
                    .map(QueryResult::Param)
            }
        }
    }

    fn execute_one(&mut self, caller: &AccountId, instruction: Instruction) -> RegistryResult<()> {
        self.execute(&Transaction::new(*caller, vec![instruction])).map(drop)
    }
}
