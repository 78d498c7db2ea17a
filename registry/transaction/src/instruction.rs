use appreg_core_types::{AccountId, Felt};
use borsh::{BorshDeserialize, BorshSerialize};

/// A state-changing step of a transaction. The acting caller is carried by the enclosing
/// [`Transaction`](crate::Transaction), never by the instruction itself.
#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum Instruction {
    AddAppId {
        app_id: Felt,
    },
    ToggleInstallAppByIndex {
        index: i64,
        installed: i64,
    },
    AddParam {
        target: AccountId,
        app_index: i64,
        param_id: Felt,
        param_value: Felt,
    },
    SetParamAtIndex {
        target: AccountId,
        app_index: i64,
        param_index: i64,
        param_id: Felt,
        param_value: Felt,
    },
}

impl Instruction {
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::AddAppId { .. } => "add_app_id",
            Instruction::ToggleInstallAppByIndex { .. } => "toggle_install_app_by_index",
            Instruction::AddParam { .. } => "add_param",
            Instruction::SetParamAtIndex { .. } => "set_param_at_index",
        }
    }
}
