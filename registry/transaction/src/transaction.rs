use appreg_core_types::AccountId;
use borsh::{BorshDeserialize, BorshSerialize};

use crate::Instruction;

/// An ordered list of instructions issued by a single caller. Either every instruction is
/// applied or none is.
#[derive(Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Transaction {
    caller: AccountId,
    instructions: Vec<Instruction>,
}

impl Transaction {
    pub fn new(caller: AccountId, instructions: Vec<Instruction>) -> Self {
        Transaction { caller, instructions }
    }

    pub fn caller(&self) -> &AccountId {
        &self.caller
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}
