//! Entropy interface: drawing a uniformly random scalar in `[1, order)`
//! from an injected randomness source.

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

/// Draw a uniformly random integer in `[1, order)` using rejection
/// sampling: draw `ceil(bitlen(order)/8)` random bytes, mask off the
/// excess high bits of the top byte so the candidate needs at most one
/// extra bit of rejection, and retry until the candidate lands in range.
pub fn randrange<R: RngCore + CryptoRng>(order: &BigUint, rng: &mut R) -> BigUint {
    let bit_len = order.bits() as usize;
    let byte_len = (bit_len + 7) / 8;
    let excess_bits = byte_len * 8 - bit_len;
    let mask = 0xffu8 >> excess_bits;

    loop {
        let mut bytes = vec![0u8; byte_len];
        rng.fill_bytes(&mut bytes);
        bytes[0] &= mask;
        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate >= num_traits::One::one() && candidate < *order {
            return candidate;
        }
    }
}
