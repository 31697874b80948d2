use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// HMAC key used to turn a seed into the root of the key tree.
pub const MASTER_SEED_KEY: &[u8] = b"Bitcoin seed";

pub fn hmac_sha512(key: &[u8], data: &[u8]) -> [u8; 64] {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// HMAC-SHA512 of the seed under [`MASTER_SEED_KEY`]. Left half is the master
/// private key, right half its chain code.
pub fn master_seed_hmac(seed: &[u8]) -> [u8; 64] {
    hmac_sha512(MASTER_SEED_KEY, seed)
}
