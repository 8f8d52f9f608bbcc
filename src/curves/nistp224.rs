//! NIST P-224 (secp224r1) curve parameters.

use super::parse_hex;
use crate::curve::CurveParams;
use std::sync::OnceLock;

static CURVE: OnceLock<CurveParams> = OnceLock::new();

pub(super) fn get() -> &'static CurveParams {
    CURVE.get_or_init(|| CurveParams {
        name: "NIST P-224",
        oid: &[1, 3, 132, 0, 33],
        p: parse_hex("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        a: parse_hex("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        b: parse_hex("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        gx: parse_hex("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        gy: parse_hex("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
        n: parse_hex("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
        h: 1,
    })
}
