use borsh::{BorshDeserialize, BorshSerialize};

/// Install state of an application entry. Only 0 and 1 are ever stored.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum InstallFlag {
    Uninstalled = 0,
    #[default]
    Installed = 1,
}

impl TryFrom<i64> for InstallFlag {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstallFlag::Uninstalled),
            1 => Ok(InstallFlag::Installed),
            other => Err(other),
        }
    }
}

impl From<InstallFlag> for u8 {
    fn from(flag: InstallFlag) -> Self {
        flag as u8
    }
}
