//! NIST P-192 (secp192r1, prime192v1) curve parameters.

use super::parse_hex;
use crate::curve::CurveParams;
use std::sync::OnceLock;

static CURVE: OnceLock<CurveParams> = OnceLock::new();

pub(super) fn get() -> &'static CurveParams {
    CURVE.get_or_init(|| CurveParams {
        name: "NIST P-192",
        oid: &[1, 2, 840, 10045, 3, 1, 1],
        p: parse_hex("fffffffffffffffffffffffffffffffeffffffffffffffff"),
        a: parse_hex("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        b: parse_hex("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        gx: parse_hex("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        gy: parse_hex("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
        n: parse_hex("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
        h: 1,
    })
}
