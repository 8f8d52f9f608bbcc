//! Named-curve registry: a constant table of parameter bundles keyed by
//! name and by OID.
//!
//! Each curve is built once, behind a [`std::sync::OnceLock`], and handed
//! out as a `&'static CurveParams` so that the curve-identity comparisons
//! in [`crate::curve`] are meaningful: two points that name "the same"
//! curve always share the same reference.

mod nistp192;
mod nistp224;
mod nistp256;
mod nistp384;
mod nistp521;
mod secp256k1;

use crate::curve::CurveParams;
use crate::error::{Error, Result};
use num_bigint::BigUint;

fn parse_hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).expect("static curve constant is valid hex")
}

/// NIST P-192 (a.k.a. secp192r1, prime192v1). OID 1.2.840.10045.3.1.1.
pub fn nistp192() -> &'static CurveParams {
    nistp192::get()
}

/// NIST P-224 (a.k.a. secp224r1). OID 1.3.132.0.33.
pub fn nistp224() -> &'static CurveParams {
    nistp224::get()
}

/// NIST P-256 (a.k.a. secp256r1, prime256v1). OID 1.2.840.10045.3.1.7.
pub fn nistp256() -> &'static CurveParams {
    nistp256::get()
}

/// NIST P-384 (a.k.a. secp384r1). OID 1.3.132.0.34.
pub fn nistp384() -> &'static CurveParams {
    nistp384::get()
}

/// NIST P-521 (a.k.a. secp521r1). OID 1.3.132.0.35.
pub fn nistp521() -> &'static CurveParams {
    nistp521::get()
}

/// SECP256k1 (the Bitcoin/Ethereum curve). OID 1.3.132.0.10.
pub fn secp256k1() -> &'static CurveParams {
    secp256k1::get()
}

/// All curves in the registry, in a fixed order.
pub fn all() -> [&'static CurveParams; 6] {
    [
        nistp192(),
        nistp224(),
        nistp256(),
        nistp384(),
        nistp521(),
        secp256k1(),
    ]
}

/// Looks up a curve by its (case-sensitive) canonical name, e.g.
/// `"NIST P-256"` or `"secp256k1"`.
pub fn by_name(name: &str) -> Result<&'static CurveParams> {
    all()
        .into_iter()
        .find(|c| c.name == name)
        .ok_or(Error::MalformedEncoding)
}

/// Looks up a curve by its ASN.1 OBJECT IDENTIFIER arcs.
pub fn by_oid(oid: &[u64]) -> Result<&'static CurveParams> {
    all()
        .into_iter()
        .find(|c| c.oid == oid)
        .ok_or(Error::MalformedEncoding)
}
