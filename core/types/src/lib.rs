mod account_id;
mod application_record;
mod felt;
mod install_flag;
mod parameter_entry;

pub use account_id::AccountId;
pub use application_record::ApplicationRecord;
pub use felt::{Felt, FeltError};
pub use install_flag::InstallFlag;
pub use parameter_entry::ParameterEntry;
