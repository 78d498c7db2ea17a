mod assert_app;
mod assert_param;

pub use assert_app::*;
pub use assert_param::*;

use appreg_core_types::Felt;

/// Encodes a short ASCII string the way the registry's callers do.
pub fn felt(text: &str) -> Felt {
    Felt::from_short_str(text).expect("test strings fit into a felt")
}
