use appreg_core_types::{AccountId, Felt, InstallFlag, ParameterEntry};
use borsh::{BorshDeserialize, BorshSerialize};

/// A side-effect free read against the registry.
#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum Query {
    GetAppLen { account: AccountId },
    GetAppArray { account: AccountId, index: i64 },
    GetAppInstallation { account: AccountId, index: i64 },
    GetAppParamCount { account: AccountId, app_index: i64 },
    GetAppParamValueArray { account: AccountId, app_index: i64, param_index: i64 },
}

#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum QueryResult {
    Count(u64),
    AppId(Felt),
    Installation(InstallFlag),
    Param(ParameterEntry),
}
