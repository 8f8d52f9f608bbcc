//! RFC 6979 deterministic nonce derivation.
//!
//! Implements the HMAC-based `HMAC_DRBG` construction of RFC 6979 Section
//! 3.2, built directly over `BigUint` and an arbitrary `baselen` rather
//! than a fixed-width field type, so it works uniformly across every
//! curve in the registry.

use digest::Digest;
use hmac::{Mac, SimpleHmac};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::bytes::{bits_to_int, int_to_bytes};

/// `HMAC_DRBG` state as described in NIST SP 800-90A, specialized to the
/// way RFC 6979 Section 3.2 drives it: seed once from `(x, h1, extra)`,
/// then pull as many `baselen`-sized candidates as needed.
struct HmacDrbg<D: Digest + Clone> {
    k: SimpleHmac<D>,
    v: Vec<u8>,
}

impl<D: Digest + Clone> HmacDrbg<D> {
    fn new(entropy_input: &[u8], nonce: &[u8], additional_data: &[u8]) -> Self {
        let out_len = <D as Digest>::output_size();
        let mut v = vec![0x01u8; out_len];
        let mut k =
            SimpleHmac::<D>::new_from_slice(&vec![0x00u8; out_len]).expect("any key length is valid for HMAC");

        for step in 0..=1u8 {
            k.update(&v);
            k.update(&[step]);
            k.update(entropy_input);
            k.update(nonce);
            k.update(additional_data);
            k = SimpleHmac::<D>::new_from_slice(&k.finalize_reset().into_bytes())
                .expect("any key length is valid for HMAC");

            k.update(&v);
            v = k.finalize_reset().into_bytes().to_vec();
        }

        Self { k, v }
    }

    /// Produce the next candidate, exactly `want_bytes` long (RFC 6979
    /// step h): repeatedly extend `T` with `V = HMAC_K(V)` until there is
    /// enough output -- no K/V reseed between those blocks -- then, once
    /// the whole candidate is assembled, reseed `K`/`V` a single time so
    /// the *next* call to `generate` starts from the state RFC 6979 step h
    /// leaves behind for a retry.
    fn generate(&mut self, want_bytes: usize) -> Vec<u8> {
        let mut t = Vec::with_capacity(want_bytes.max(self.v.len()));
        while t.len() < want_bytes {
            self.k.update(&self.v);
            self.v = self.k.finalize_reset().into_bytes().to_vec();
            t.extend_from_slice(&self.v);
        }
        t.truncate(want_bytes);

        self.k.update(&self.v);
        self.k.update(&[0x00]);
        self.k = SimpleHmac::<D>::new_from_slice(&self.k.finalize_reset().into_bytes())
            .expect("any key length is valid for HMAC");
        self.k.update(&self.v);
        self.v = self.k.finalize_reset().into_bytes().to_vec();

        t
    }
}

/// Deterministically derive the next RFC 6979 candidate `k`, given the
/// secret scalar `d`, the message digest, the group order `n`, a retry
/// counter, and optional extra entropy.
///
/// `retry` preliminary candidates are generated and discarded before the
/// one that is returned; each retry re-drives the same HMAC_DRBG seed
/// rather than starting over, matching RFC 6979's "continue" path for
/// when a candidate lands outside `[1, n-1]` or yields a degenerate
/// signature.
pub fn generate_k<D: Digest + Clone>(
    d: &BigUint,
    digest: &[u8],
    n: &BigUint,
    baselen: usize,
    retry: u32,
    extra_entropy: &[u8],
) -> BigUint {
    let qlen = n.bits() as usize;

    let mut x_bytes = int_to_bytes(d, baselen);
    let h1 = digest_bits2octets::<D>(digest, n, qlen, baselen);

    let mut seed_nonce = h1;
    let mut additional = Vec::new();
    additional.extend_from_slice(extra_entropy);

    let mut drbg = HmacDrbg::<D>::new(&x_bytes, &seed_nonce, &additional);
    x_bytes.zeroize();
    seed_nonce.zeroize();

    // Discard `retry` candidates (each pulled the RFC 6979 way: generate,
    // check range, generate again on failure) before returning the next
    // one. In the overwhelming common case `retry == 0` so no candidate
    // is discarded at all.
    let mut discarded = 0u32;
    loop {
        let t = drbg.generate(baselen);
        let k = bits_to_int(&t, qlen);
        if k.is_zero() || k >= *n {
            continue;
        }
        if discarded < retry {
            discarded += 1;
            continue;
        }
        return k;
    }
}

/// RFC 6979 `bits2octets(h1)`: `bits2int` the digest to `qlen` bits,
/// reduce mod `n` if necessary, then `int2octets` back to `baselen`
/// bytes.
fn digest_bits2octets<D: Digest>(
    digest: &[u8],
    n: &BigUint,
    qlen: usize,
    baselen: usize,
) -> Vec<u8> {
    let z1 = bits_to_int(digest, qlen);
    let z2 = if z1 >= *n { z1 - n } else { z1 };
    int_to_bytes(&z2, baselen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;
    use sha2::Sha256;

    /// RFC 6979 Appendix A.2.5 (NIST P-256 + SHA-256, message "sample").
    #[test]
    fn rfc6979_p256_sample() {
        let curve = curves::nistp256();
        let d = BigUint::parse_bytes(
            b"c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
            16,
        )
        .unwrap();
        let digest = Sha256::digest(b"sample");
        let k = generate_k::<Sha256>(&d, &digest, &curve.n, curve.baselen(), 0, &[]);
        let expected = BigUint::parse_bytes(
            b"a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60",
            16,
        )
        .unwrap();
        assert_eq!(k, expected);
    }

    /// `generate_k` is a pure function of its inputs: two calls with the
    /// same `(d, digest, n, baselen, retry, extra_entropy)` must agree.
    #[test]
    fn generate_k_is_deterministic() {
        let curve = curves::nistp256();
        let d = BigUint::parse_bytes(
            b"c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
            16,
        )
        .unwrap();
        let digest = Sha256::digest(b"test message");
        let k1 = generate_k::<Sha256>(&d, &digest, &curve.n, curve.baselen(), 0, &[]);
        let k2 = generate_k::<Sha256>(&d, &digest, &curve.n, curve.baselen(), 0, &[]);
        assert_eq!(k1, k2);
        assert!(k1 >= BigUint::one() && k1 < curve.n);
    }

    /// Different retry counters must (overwhelmingly likely) produce
    /// different candidates, since each retry re-drives the DRBG further.
    #[test]
    fn generate_k_retry_differs() {
        let curve = curves::nistp256();
        let d = BigUint::parse_bytes(
            b"c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
            16,
        )
        .unwrap();
        let digest = Sha256::digest(b"retry message");
        let k0 = generate_k::<Sha256>(&d, &digest, &curve.n, curve.baselen(), 0, &[]);
        let k1 = generate_k::<Sha256>(&d, &digest, &curve.n, curve.baselen(), 1, &[]);
        assert_ne!(k0, k1);
    }
}
