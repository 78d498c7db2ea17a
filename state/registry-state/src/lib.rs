mod app_entry;
mod app_len;
mod keys;
mod param_entry;
mod param_len;

pub use app_entry::AppEntry;
pub use app_len::AppLen;
pub use keys::{app_key, param_key};
pub use param_entry::ParamEntry;
pub use param_len::ParamLen;
