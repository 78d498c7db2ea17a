mod instruction;
mod query;
mod transaction;
mod transaction_effects;

pub use instruction::Instruction;
pub use query::{Query, QueryResult};
pub use transaction::Transaction;
pub use transaction_effects::TransactionEffects;
