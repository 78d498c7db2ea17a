mod account_registry;
mod bounds;
mod instruction_processor;
mod reads;
mod staged_state;

pub use account_registry::AccountRegistry;
pub use appreg_registry_error::{RegistryError, RegistryResult};
