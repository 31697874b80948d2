use crate::scalar::{add_mod_order, reduce};
use crypto_utils::{hmac::master_seed_hmac, hmac_sha512};
use secp256k1::{PublicKey, Secp256k1, SecretKey, Signing};
use std::fmt;

/// Hardened flag used by Dough Wallet. An index is hardened when it shares any
/// bit with this mask. Every hardened index in this crate is built from it.
pub const HARDENED_MARKER: u32 = 0x9e00_0000;

/// Hardened offset of standard BIP-32 (2³¹). Not used for derivation; kept so
/// the divergence from the standard rule can be named and tested.
pub const STANDARD_HARDENED_OFFSET: u32 = 0x8000_0000;

/// Serialization of a zero scalar's "public key", matching what the wallet's
/// curve library emits for the point at infinity.
const INFINITY_COMPRESSED: [u8; 33] = {
    let mut out = [0u8; 33];
    out[0] = 0x02;
    out
};

pub fn is_hardened(index: u32) -> bool {
    index & HARDENED_MARKER != 0
}

/// Hardened index for `ordinal` under the wallet's marker.
pub fn hardened(ordinal: u32) -> u32 {
    ordinal | HARDENED_MARKER
}

/// Compressed SEC1 public key (33 bytes) for a raw 32-byte private key.
///
/// The key is reduced modulo the curve order first, so a master key at or
/// above `n` maps to the same point the wallet computes.
pub fn compressed_public_key<C: Signing>(secp: &Secp256k1<C>, private_key: &[u8; 32]) -> [u8; 33] {
    let canonical: [u8; 32] = reduce(private_key).to_bytes().into();
    match SecretKey::from_slice(&canonical) {
        Ok(sk) => PublicKey::from_secret_key(secp, &sk).serialize(),
        Err(_) => {
            tracing::warn!("private key is zero modulo the curve order; public key is undefined");
            INFINITY_COMPRESSED
        }
    }
}

/// One node of the key tree: a private key and its chain code.
///
/// Key validity (`0 < key < n`) is not checked anywhere; a zero or
/// out-of-range key has probability around 2⁻¹²⁸ and is accepted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ExtendedKey {
    pub private_key: [u8; 32],
    pub chain_code: [u8; 32],
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("private_key", &"[REDACTED]")
            .field("chain_code", &self.chain_code)
            .finish()
    }
}

impl ExtendedKey {
    /// Root of the tree: `HMAC-SHA512("Bitcoin seed", seed)` split in halves.
    pub fn master(seed: &[u8]) -> Self {
        let i = master_seed_hmac(seed);
        Self::from_hmac_output(&i)
    }

    fn from_hmac_output(i: &[u8; 64]) -> Self {
        let mut private_key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        private_key.copy_from_slice(&i[..32]);
        chain_code.copy_from_slice(&i[32..]);
        ExtendedKey {
            private_key,
            chain_code,
        }
    }

    pub fn public_key<C: Signing>(&self, secp: &Secp256k1<C>) -> [u8; 33] {
        compressed_public_key(secp, &self.private_key)
    }

    /// Private child key derivation (CKDpriv) with the wallet's hardened rule.
    ///
    /// Hardened: `HMAC-SHA512(chain_code, 0x00 || key || index_be)`.
    /// Normal:   `HMAC-SHA512(chain_code, pubkey || index_be)`.
    /// Child key is `(IL + key) mod n`, child chain code is `IR`.
    pub fn derive_child<C: Signing>(&self, secp: &Secp256k1<C>, index: u32) -> Self {
        let mut data = Vec::with_capacity(33 + 4);
        if is_hardened(index) {
            data.push(0u8);
            data.extend_from_slice(&self.private_key);
        } else {
            data.extend_from_slice(&self.public_key(secp));
        }
        data.extend_from_slice(&index.to_be_bytes());

        let i = hmac_sha512(&self.chain_code, &data);
        let mut il = [0u8; 32];
        il.copy_from_slice(&i[..32]);

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);

        ExtendedKey {
            private_key: add_mod_order(&il, &self.private_key),
            chain_code,
        }
    }
}
