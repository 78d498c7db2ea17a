use appreg_core_types::{AccountId, ApplicationRecord, ParameterEntry};
use appreg_registry_error::{RegistryError, RegistryResult};
use appreg_state::{AppEntry, AppLen, ParamEntry, ParamLen};
use appreg_state_space::StateSpace;
use appreg_storage_types::ReadStore;

use crate::bounds::checked_index;

pub(crate) fn app_len<R>(store: &R, account: &AccountId) -> RegistryResult<u64>
where
    R: ReadStore<StateSpace = StateSpace>,
{
    Ok(AppLen::get(store, account)?)
}

/// Returns the resolved position together with the application stored there.
pub(crate) fn app_record<R>(
    store: &R,
    account: &AccountId,
    index: i64,
) -> RegistryResult<(u64, ApplicationRecord)>
where
    R: ReadStore<StateSpace = StateSpace>,
{
    let position = checked_index(index, app_len(store, account)?)?;
    match AppEntry::get(store, account, position)? {
        Some(record) => Ok((position, record)),
        None => Err(RegistryError::MissingData(format!("app {account}[{position}]"))),
    }
}

/// Returns the resolved application position together with its parameter count.
pub(crate) fn param_len<R>(
    store: &R,
    account: &AccountId,
    app_index: i64,
) -> RegistryResult<(u64, u64)>
where
    R: ReadStore<StateSpace = StateSpace>,
{
    let app_position = checked_index(app_index, app_len(store, account)?)?;
    Ok((app_position, ParamLen::get(store, account, app_position)?))
}

pub(crate) fn param_entry<R>(
    store: &R,
    account: &AccountId,
    app_index: i64,
    param_index: i64,
) -> RegistryResult<ParameterEntry>
where
    R: ReadStore<StateSpace = StateSpace>,
{
    let (app_position, len) = param_len(store, account, app_index)?;
    let position = checked_index(param_index, len)?;
    match ParamEntry::get(store, account, app_position, position)? {
        Some(entry) => Ok(entry),
        None => Err(RegistryError::MissingData(format!(
            "param {account}[{app_position}][{position}]"
        ))),
    }
}
