use crate::hash::sha256d;
use thiserror::Error;

const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {0:?}")]
    InvalidCharacter(char),
    #[error("non-ASCII byte at position {0}")]
    NonAscii(usize),
    #[error("decoded data too short for a version byte and checksum")]
    InvalidLength,
    #[error("checksum mismatch")]
    InvalidChecksum,
}

impl From<bs58::decode::Error> for Base58Error {
    fn from(err: bs58::decode::Error) -> Self {
        match err {
            bs58::decode::Error::InvalidCharacter { character, .. } => {
                Base58Error::InvalidCharacter(character)
            }
            bs58::decode::Error::NonAsciiCharacter { index } => Base58Error::NonAscii(index),
            _ => Base58Error::InvalidLength,
        }
    }
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Base58Check: `version || payload || sha256d(version || payload)[..4]`.
pub fn checksum_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let sum = checksum(&data);
    data.extend_from_slice(&sum);
    bs58::encode(data).into_string()
}

/// Inverse of [`checksum_encode`]. Returns the version byte and the payload.
pub fn checksum_decode(s: &str) -> Result<(u8, Vec<u8>), Base58Error> {
    let raw = bs58::decode(s).into_vec()?;
    if raw.len() < 1 + CHECKSUM_LEN {
        return Err(Base58Error::InvalidLength);
    }
    let (data, sum) = raw.split_at(raw.len() - CHECKSUM_LEN);
    if checksum(data) != sum {
        return Err(Base58Error::InvalidChecksum);
    }
    Ok((data[0], data[1..].to_vec()))
}
