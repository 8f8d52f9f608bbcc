//! Test-support functionality shared by this crate's own test suite.
//!
//! Unlike the const-generic curve types this crate's teacher is built on,
//! [`CurveParams`] is just a bundle of [`BigUint`]s, so a deliberately tiny
//! curve costs nothing extra to support: [`tiny_curve`] is small enough that
//! property tests can brute-force every scalar in its group instead of
//! sampling, the same role the teacher's `ExampleCurve` plays for its own
//! suite.

#![cfg(feature = "dev")]

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::curve::CurveParams;

static TINY_CURVE: OnceLock<CurveParams> = OnceLock::new();

/// `y^2 = x^3 + 2x + 2 (mod 17)`, a textbook curve with a generator of
/// prime order 19 (cofactor 1, so the 19-element subgroup is the entire
/// curve plus the point at infinity). Small enough to exhaustively walk
/// every nonzero scalar `1..n` in a test.
pub fn tiny_curve() -> &'static CurveParams {
    TINY_CURVE.get_or_init(|| CurveParams {
        name: "tiny-test-curve",
        oid: &[],
        p: BigUint::from(17u32),
        a: BigUint::from(2u32),
        b: BigUint::from(2u32),
        gx: BigUint::from(5u32),
        gy: BigUint::from(1u32),
        n: BigUint::from(19u32),
        h: 1,
    })
}
