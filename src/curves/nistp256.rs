//! NIST P-256 (secp256r1, prime256v1) curve parameters.

use super::parse_hex;
use crate::curve::CurveParams;
use std::sync::OnceLock;

static CURVE: OnceLock<CurveParams> = OnceLock::new();

pub(super) fn get() -> &'static CurveParams {
    CURVE.get_or_init(|| CurveParams {
        name: "NIST P-256",
        oid: &[1, 2, 840, 10045, 3, 1, 7],
        p: parse_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        a: parse_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        b: parse_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        gx: parse_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        gy: parse_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        n: parse_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        h: 1,
    })
}
