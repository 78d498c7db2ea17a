use appreg_core_types::{AccountId, ApplicationRecord, Felt, InstallFlag, ParameterEntry};
use appreg_registry_error::{RegistryError, RegistryResult};
use appreg_state::{AppEntry, AppLen, ParamEntry, ParamLen};
use appreg_state_space::StateSpace;
use appreg_storage_types::Store;
use appreg_transaction::Instruction;
use tracing::trace;

use crate::{
    bounds::{authorize, checked_index},
    reads,
    staged_state::StagedState,
};

/// Validates a single instruction against the staged state and stages its writes.
///
/// Every check runs before the first write is staged.
pub(crate) fn apply<S>(
    state: &mut StagedState<'_, S>,
    caller: &AccountId,
    instruction: &Instruction,
) -> RegistryResult<()>
where
    S: Store<StateSpace = StateSpace>,
{
    match instruction {
        Instruction::AddAppId { app_id } => add_app_id(state, caller, *app_id),
        Instruction::ToggleInstallAppByIndex { index, installed } => {
            toggle_install_app_by_index(state, caller, *index, *installed)
        }
        Instruction::AddParam { target, app_index, param_id, param_value } => {
            let entry = ParameterEntry::new(*param_id, *param_value);
            add_param(state, caller, target, *app_index, entry)
        }
        Instruction::SetParamAtIndex { target, app_index, param_index, param_id, param_value } => {
            let entry = ParameterEntry::new(*param_id, *param_value);
            set_param_at_index(state, caller, target, *app_index, *param_index, entry)
        }
    }
}

fn add_app_id<S>(
    state: &mut StagedState<'_, S>,
    caller: &AccountId,
    app_id: Felt,
) -> RegistryResult<()>
where
    S: Store<StateSpace = StateSpace>,
{
    let len = reads::app_len(&*state, caller)?;

    trace!(%caller, position = len, %app_id, "staging new application");
    AppEntry::put(state, caller, len, &ApplicationRecord::new(app_id))?;
    AppLen::put(state, caller, len + 1);
    Ok(())
}

fn toggle_install_app_by_index<S>(
    state: &mut StagedState<'_, S>,
    caller: &AccountId,
    index: i64,
    installed: i64,
) -> RegistryResult<()>
where
    S: Store<StateSpace = StateSpace>,
{
    let flag = InstallFlag::try_from(installed).map_err(RegistryError::InvalidFlag)?;
    let (position, record) = reads::app_record(&*state, caller, index)?;

    trace!(%caller, position, installed = u8::from(flag), "staging install flag");
    AppEntry::put(state, caller, position, &ApplicationRecord { installed: flag, ..record })?;
    Ok(())
}

fn add_param<S>(
    state: &mut StagedState<'_, S>,
    caller: &AccountId,
    target: &AccountId,
    app_index: i64,
    entry: ParameterEntry,
) -> RegistryResult<()>
where
    S: Store<StateSpace = StateSpace>,
{
    authorize(caller, target)?;
    let (app_position, len) = reads::param_len(&*state, target, app_index)?;

    trace!(%target, app_position, position = len, "staging new parameter");
    ParamEntry::put(state, target, app_position, len, &entry)?;
    ParamLen::put(state, target, app_position, len + 1);
    Ok(())
}

fn set_param_at_index<S>(
    state: &mut StagedState<'_, S>,
    caller: &AccountId,
    target: &AccountId,
    app_index: i64,
    param_index: i64,
    entry: ParameterEntry,
) -> RegistryResult<()>
where
    S: Store<StateSpace = StateSpace>,
{
    authorize(caller, target)?;
    let (app_position, len) = reads::param_len(&*state, target, app_index)?;
    let position = checked_index(param_index, len)?;

    trace!(%target, app_position, position, "staging parameter overwrite");
    ParamEntry::put(state, target, app_position, position, &entry)?;
    Ok(())
}
