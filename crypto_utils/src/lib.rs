//! Hash and text-encoding primitives shared by the key-derivation crates.

pub mod base58;
pub mod hash;
pub mod hmac;

pub use self::base58::{Base58Error, checksum_decode, checksum_encode};
pub use self::hash::{hash160, ripemd160, sha256, sha256d};
pub use self::hmac::{MASTER_SEED_KEY, hmac_sha512, master_seed_hmac};
