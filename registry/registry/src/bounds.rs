use appreg_core_types::AccountId;
use appreg_registry_error::{RegistryError, RegistryResult};

/// Resolves a signed index against the current length of a sequence.
pub(crate) fn checked_index(index: i64, len: u64) -> RegistryResult<u64> {
    match u64::try_from(index) {
        Ok(position) if position < len => Ok(position),
        _ => Err(RegistryError::IndexOutOfRange { index, len }),
    }
}

/// Callers may only write to their own account.
pub(crate) fn authorize(caller: &AccountId, target: &AccountId) -> RegistryResult<()> {
    match caller == target {
        true => Ok(()),
        false => Err(RegistryError::Unauthorized { caller: *caller, target: *target }),
    }
}
