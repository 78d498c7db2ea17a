use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

/// A 32-byte big-endian bounded integer.
///
/// Used for application ids as well as parameter keys and values. Short ASCII
/// strings convert into a felt by reading their bytes as a big-endian number, so
/// `"testkey"` and its numeric encoding compare equal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(BorshSerialize, BorshDeserialize)]
pub struct Felt([u8; 32]);

#[derive(Debug, Error, Eq, PartialEq)]
pub enum FeltError {
    #[error("short string of {0} bytes exceeds the {max} byte limit", max = Felt::MAX_SHORT_STRING_LEN)]
    StringTooLong(usize),

    #[error("short string contains non-ascii characters")]
    NonAscii,
}

impl Felt {
    /// Keeps string-encoded values strictly below 2^248.
    pub const MAX_SHORT_STRING_LEN: usize = 31;

    pub const ZERO: Felt = Felt([0u8; 32]);

    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Encodes a short ASCII string, right-aligned.
    pub fn from_short_str(text: &str) -> Result<Self, FeltError> {
        if !text.is_ascii() {
            return Err(FeltError::NonAscii);
        }
        if text.len() > Self::MAX_SHORT_STRING_LEN {
            return Err(FeltError::StringTooLong(text.len()));
        }

        let mut bytes = [0u8; 32];
        bytes[32 - text.len()..].copy_from_slice(text.as_bytes());
        Ok(Self(bytes))
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self::from(value as u128)
    }
}

impl From<u128> for Felt {
    fn from(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[16..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl TryFrom<&str> for Felt {
    type Error = FeltError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_short_str(text)
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.iter().skip_while(|byte| **byte == 0).collect::<Vec<_>>();
        if digits.is_empty() {
            return f.write_str("0x0");
        }

        f.write_str("0x")?;
        digits.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}
