use borsh::{BorshDeserialize, BorshSerialize};

use crate::Felt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct ParameterEntry {
    pub param_id: Felt,
    pub param_value: Felt,
}

impl ParameterEntry {
    pub fn new(param_id: Felt, param_value: Felt) -> Self {
        Self { param_id, param_value }
    }
}

impl From<ParameterEntry> for (Felt, Felt) {
    fn from(entry: ParameterEntry) -> Self {
        (entry.param_id, entry.param_value)
    }
}
