//! Scalar arithmetic modulo the secp256k1 group order.

use k256::elliptic_curve::{bigint::U256, ops::Reduce};
use k256::{FieldBytes, Scalar};

/// secp256k1 group order `n`, big-endian.
pub const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Interpret 32 big-endian bytes as an integer and reduce it modulo `n`.
pub fn reduce(bytes: &[u8; 32]) -> Scalar {
    <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*bytes))
}

/// `(il + k) mod n` as a 32-byte big-endian value.
///
/// Operands are reduced before the addition, so inputs at or above `n` are
/// accepted and the result equals the 512-bit sum reduced modulo `n`. A zero
/// result is returned as-is; callers treat that case as an accepted risk.
pub fn add_mod_order(il: &[u8; 32], k: &[u8; 32]) -> [u8; 32] {
    let sum = reduce(il) + reduce(k);
    sum.to_bytes().into()
}
