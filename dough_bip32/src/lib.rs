//! Dough Wallet's variant of BIP-32 key derivation.
//!
//! Identical to standard BIP-32 except for the hardened flag: an index is
//! hardened when it intersects [`HARDENED_MARKER`] (`0x9e000000`) rather than
//! when it is at least `0x80000000`.

pub mod derivation;
pub mod encode;
pub mod error;
pub mod extended_key;
pub mod scalar;

pub use derivation::DerivationPath;
pub use encode::{decode_address, decode_wif, private_key_to_wif, public_key_to_address};
pub use error::KeyError;
pub use extended_key::{
    ExtendedKey, HARDENED_MARKER, STANDARD_HARDENED_OFFSET, compressed_public_key, hardened,
    is_hardened,
};
