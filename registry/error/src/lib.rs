use appreg_core_types::AccountId;
use thiserror::Error;

/// Reasons a registry operation is rejected. A rejected operation never mutates state.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: i64, len: u64 },

    #[error("install flag must be 0 or 1, got {0}")]
    InvalidFlag(i64),

    #[error("caller {caller} may not write to account {target}")]
    Unauthorized { caller: AccountId, target: AccountId },

    #[error("failed to decode stored state: {0}")]
    Serialization(#[from] std::io::Error),

    #[error("missing stored entry for {0}")]
    MissingData(String),
}

impl RegistryError {
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, RegistryError::IndexOutOfRange { .. })
    }

    pub fn is_invalid_flag(&self) -> bool {
        matches!(self, RegistryError::InvalidFlag(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RegistryError::Unauthorized { .. })
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
