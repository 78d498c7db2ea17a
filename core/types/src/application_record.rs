use borsh::{BorshDeserialize, BorshSerialize};

use crate::{Felt, InstallFlag};

/// The stored head of an application entry. Its parameters live in their own keyspace,
/// addressed by the owning account and the entry's position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct ApplicationRecord {
    pub app_id: Felt,
    pub installed: InstallFlag,
}

impl ApplicationRecord {
    /// Freshly registered applications start out installed.
    pub fn new(app_id: Felt) -> Self {
        Self { app_id, installed: InstallFlag::Installed }
    }
}
