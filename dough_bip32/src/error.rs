use crypto_utils::Base58Error;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid base58 encoding: {0}")]
    InvalidBase58(Base58Error),
    #[error("checksum mismatch")]
    InvalidChecksum,
    #[error("unexpected payload length {0}")]
    InvalidLength(usize),
    #[error("unexpected version byte {0}")]
    InvalidVersion(u8),
    #[error("missing compressed-key flag")]
    InvalidKeyData,
    #[error("invalid derivation path: {0}")]
    InvalidDerivationPath(String),
}

impl From<Base58Error> for KeyError {
    fn from(err: Base58Error) -> Self {
        match err {
            Base58Error::InvalidChecksum => KeyError::InvalidChecksum,
            other => KeyError::InvalidBase58(other),
        }
    }
}
