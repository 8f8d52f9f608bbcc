//! SECP256k1 curve parameters (the Bitcoin/Ethereum curve).

use super::parse_hex;
use crate::curve::CurveParams;
use std::sync::OnceLock;

static CURVE: OnceLock<CurveParams> = OnceLock::new();

pub(super) fn get() -> &'static CurveParams {
    CURVE.get_or_init(|| CurveParams {
        name: "secp256k1",
        oid: &[1, 3, 132, 0, 10],
        p: parse_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        a: parse_hex("0000000000000000000000000000000000000000000000000000000000000000"),
        b: parse_hex("0000000000000000000000000000000000000000000000000000000000000007"),
        gx: parse_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        gy: parse_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        n: parse_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        h: 1,
    })
}
