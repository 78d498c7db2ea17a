use appreg_core_types::AccountId;
use appreg_storage_types::concat_bytes;

/// Key layout: `account || app_index.to_be_bytes()`
pub fn app_key(account: &AccountId, app_index: u64) -> Vec<u8> {
    concat_bytes!(account.as_bytes(), &app_index.to_be_bytes())
}

/// Key layout: `account || app_index.to_be_bytes() || param_index.to_be_bytes()`
pub fn param_key(account: &AccountId, app_index: u64, param_index: u64) -> Vec<u8> {
    concat_bytes!(account.as_bytes(), &app_index.to_be_bytes(), &param_index.to_be_bytes())
}

pub(crate) fn decode_len(bytes: Vec<u8>) -> std::io::Result<u64> {
    match <[u8; 8]>::try_from(bytes.as_slice()) {
        Ok(raw) => Ok(u64::from_be_bytes(raw)),
        Err(_) => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("length value must be 8 bytes, found {}", bytes.len()),
        )),
    }
}
