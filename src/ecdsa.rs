//! Core ECDSA operations: `sign`, `verify`, and public-key recovery, all
//! working directly on curve points and big integers. The key façades in
//! [`crate::signing_key`] and [`crate::verifying_key`] are thin wrappers
//! around this module plus serialization.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arith;
use crate::curve::{point_is_valid, CurveParams, Point};
use crate::error::{Error, Result};

/// Truncate a digest to the leftmost `bitlen(n)` bits and interpret it as
/// a big-endian integer `e`, the digest-as-integer. No further reduction
/// mod `n` happens here -- the sign/verify arithmetic reduces mod `n`
/// naturally wherever `e` is combined with other scalars.
pub fn digest_to_scalar(curve: &CurveParams, digest: &[u8]) -> BigUint {
    crate::bytes::digest_to_scalar(digest, curve.n.bits() as usize)
}

/// ECDSA signature generation.
///
/// Given the digest-as-integer `e`, the secret scalar `d`, and a
/// per-message nonce `k` with `1 <= k < n`, returns `(r, s)`.
///
/// Fails with [`Error::RsZero`] if either component comes out zero; the
/// caller is expected to retry with a fresh `k` (the deterministic
/// signing loop in [`crate::signing_key`] does this automatically).
pub fn sign(curve: &CurveParams, e: &BigUint, d: &BigUint, k: &BigUint) -> Result<(BigUint, BigUint)> {
    debug_assert!(*k >= BigUint::one() && *k < curve.n, "k out of range");
    debug_assert!(*d >= BigUint::one() && *d < curve.n, "d out of range");

    let g = curve.generator();
    let point = g.mul(k);
    let x1 = point.x().cloned().unwrap_or_else(BigUint::zero);
    let r = &x1 % &curve.n;

    if r.is_zero() {
        return Err(Error::RsZero);
    }

    let k_inv = arith::mod_inverse(k, &curve.n)?;
    let s = (&k_inv * ((e + &r * d) % &curve.n)) % &curve.n;

    if s.is_zero() {
        return Err(Error::RsZero);
    }

    Ok((r, s))
}

/// ECDSA signature verification.
///
/// `e` is the digest-as-integer (see [`digest_to_scalar`]). Returns `Ok(())`
/// on success; [`Error::BadSignature`] otherwise.
pub fn verify(curve: &CurveParams, q: &Point<'_>, r: &BigUint, s: &BigUint, e: &BigUint) -> Result<()> {
    if r.is_zero() || *r >= curve.n || s.is_zero() || *s >= curve.n {
        return Err(Error::BadSignature);
    }

    let w = arith::mod_inverse(s, &curve.n).map_err(|_| Error::BadSignature)?;
    let u1 = (e * &w) % &curve.n;
    let u2 = (r * &w) % &curve.n;

    let g = curve.generator();
    let point = g.mul(&u1).add(&q.mul(&u2));

    if point.is_identity() {
        return Err(Error::BadSignature);
    }

    let x = point.x().expect("checked non-identity above");
    if (x % &curve.n) == *r {
        Ok(())
    } else {
        Err(Error::BadSignature)
    }
}

/// Public-key recovery.
///
/// Given `(r, s)` and the digest-as-integer `e`, returns every candidate
/// public point that both lies validly on the curve and verifies `(r, s)`
/// against `e`. Candidates are tried in a fixed order: `(j=0, even y)`,
/// `(j=0, odd y)`, `(j=1, even y)`, `(j=1, odd y)`, skipping any
/// `x = r + j*n >= p`.
pub fn recover_public_keys<'c>(
    curve: &'c CurveParams,
    r: &BigUint,
    s: &BigUint,
    e: &BigUint,
) -> Result<Vec<Point<'c>>> {
    if r.is_zero() || *r >= curve.n || s.is_zero() || *s >= curve.n {
        return Err(Error::MalformedSignature);
    }

    let r_inv = arith::mod_inverse(r, &curve.n)?;
    let mut candidates = Vec::new();

    for j in 0u32..=1 {
        let x = r + BigUint::from(j) * &curve.n;
        if x >= curve.p {
            continue;
        }

        let y_sq = (&x * &x % &curve.p * &x % &curve.p + &curve.a * &x % &curve.p + &curve.b) % &curve.p;
        let y = match arith::mod_sqrt(&y_sq, &curve.p) {
            Ok(y) => y,
            Err(_) => continue,
        };
        let y_other = &curve.p - &y;

        for candidate_y in even_then_odd(y, y_other) {
            let r_point = Point::Affine {
                curve,
                x: x.clone(),
                y: candidate_y,
            };

            // Q = r^-1 * (s*R - e*G)
            let s_r = r_point.mul(s);
            let e_g = curve.generator().mul(e);
            let diff = s_r.add(&e_g.negate());
            let q = diff.mul(&r_inv);

            if q.is_identity() {
                continue;
            }
            let (qx, qy) = (
                q.x().expect("checked non-identity").clone(),
                q.y().expect("checked non-identity").clone(),
            );
            if !point_is_valid(curve, &qx, &qy) {
                continue;
            }
            if verify(curve, &q, r, s, e).is_ok() {
                candidates.push(q);
            }
        }
    }

    Ok(candidates)
}

/// Yields `(y even, y odd)` in that order, given a value and its
/// curve-negation, whichever of the pair is actually even.
fn even_then_odd(y: BigUint, y_other: BigUint) -> [BigUint; 2] {
    if y.bit(0) {
        [y_other, y]
    } else {
        [y, y_other]
    }
}
