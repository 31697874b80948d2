//! Dogecoin mainnet text formats for keys derived by this crate.

use crate::KeyError;
use crypto_utils::{checksum_decode, checksum_encode, hash160};

/// P2PKH address version; addresses start with 'D'.
pub const ADDRESS_VERSION: u8 = 30;
/// Wallet import format version; compressed WIF strings start with 'Q'.
pub const WIF_VERSION: u8 = 158;
/// Trailing WIF byte marking the key's public key as compressed.
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

pub fn public_key_to_address(public_key: &[u8; 33]) -> String {
    checksum_encode(ADDRESS_VERSION, &hash160(public_key))
}

pub fn private_key_to_wif(private_key: &[u8; 32]) -> String {
    let mut payload = Vec::with_capacity(33);
    payload.extend_from_slice(private_key);
    payload.push(WIF_COMPRESSED_FLAG);
    checksum_encode(WIF_VERSION, &payload)
}

/// HASH160 carried by a P2PKH address.
pub fn decode_address(address: &str) -> Result<[u8; 20], KeyError> {
    let (version, payload) = checksum_decode(address)?;
    if version != ADDRESS_VERSION {
        return Err(KeyError::InvalidVersion(version));
    }
    payload
        .as_slice()
        .try_into()
        .map_err(|_| KeyError::InvalidLength(payload.len()))
}

/// Raw private key from a compressed WIF string.
pub fn decode_wif(wif: &str) -> Result<[u8; 32], KeyError> {
    let (version, payload) = checksum_decode(wif)?;
    if version != WIF_VERSION {
        return Err(KeyError::InvalidVersion(version));
    }
    if payload.len() != 33 {
        return Err(KeyError::InvalidLength(payload.len()));
    }
    if payload[32] != WIF_COMPRESSED_FLAG {
        return Err(KeyError::InvalidKeyData);
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&payload[..32]);
    Ok(key)
}
