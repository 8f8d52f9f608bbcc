//! Fixed-length big-endian integer <-> byte conversions shared by the
//! SEC1, DER, and RFC 6979 layers.

use num_bigint::BigUint;
use num_traits::Zero;

/// Encode `x` as `len` big-endian bytes, left-padded with zeros.
///
/// # Panics
///
/// Panics if `x` does not fit in `len` bytes; callers must only invoke
/// this with scalars already known to be in range for the given curve.
pub fn int_to_bytes(x: &BigUint, len: usize) -> Vec<u8> {
    let raw = x.to_bytes_be();
    assert!(raw.len() <= len, "integer does not fit in {len} bytes");
    let mut out = vec![0u8; len];
    out[len - raw.len()..].copy_from_slice(&raw);
    out
}

/// Decode a big-endian byte string as an unsigned integer.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    if bytes.is_empty() {
        return BigUint::zero();
    }
    BigUint::from_bytes_be(bytes)
}

/// RFC 6979 `bits2int`: interpret `bits` as a big-endian integer, then if
/// it has more bits than `qlen` (`= bitlen(n)`), shift right to keep only
/// the leftmost `qlen` bits.
pub fn bits_to_int(bits: &[u8], qlen: usize) -> BigUint {
    let x = bytes_to_int(bits);
    let vlen = bits.len() * 8;
    if vlen > qlen {
        x >> (vlen - qlen)
    } else {
        x
    }
}

/// Digest-to-scalar truncation rule shared by ECDSA sign/verify and RFC
/// 6979: take the leftmost `qlen = bitlen(n)` bits of the digest,
/// big-endian, as an integer (no further reduction mod `n` here -- that
/// happens naturally inside the sign/verify arithmetic).
pub fn digest_to_scalar(digest: &[u8], qlen: usize) -> BigUint {
    bits_to_int(digest, qlen)
}
