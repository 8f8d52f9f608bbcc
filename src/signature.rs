//! `(r, s)` signature values, plus the two built-in encode/decode
//! strategies: fixed-length concatenated integers ("string") and a DER
//! `SEQUENCE` of two `INTEGER`s ("der").

use num_bigint::BigUint;

use crate::bytes::{bytes_to_int, int_to_bytes};
#[cfg(feature = "der")]
use crate::der;
use crate::error::{Error, Result};

/// A raw ECDSA signature: a pair of scalars, each reduced mod the
/// group order by construction (see [`crate::ecdsa::sign`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Encode as `r || s`, each a fixed-length `baselen` big-endian
    /// integer.
    pub fn to_string_encoding(&self, baselen: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 * baselen);
        out.extend_from_slice(&int_to_bytes(&self.r, baselen));
        out.extend_from_slice(&int_to_bytes(&self.s, baselen));
        out
    }

    /// Decode `r || s`, each exactly `baselen` bytes. Fails with
    /// [`Error::MalformedSignature`] if the length does not match.
    pub fn from_string_encoding(bytes: &[u8], baselen: usize) -> Result<Self> {
        if bytes.len() != 2 * baselen {
            return Err(Error::MalformedSignature);
        }
        let r = bytes_to_int(&bytes[..baselen]);
        let s = bytes_to_int(&bytes[baselen..]);
        Ok(Self { r, s })
    }

    /// Encode as a DER `SEQUENCE { INTEGER r, INTEGER s }`.
    #[cfg(feature = "der")]
    pub fn to_der_encoding(&self) -> Vec<u8> {
        der::encode_sequence(&[der::encode_integer(&self.r), der::encode_integer(&self.s)])
    }

    /// Decode a DER `SEQUENCE { INTEGER r, INTEGER s }`. Rejects
    /// trailing junk and malformed integers.
    #[cfg(feature = "der")]
    pub fn from_der_encoding(bytes: &[u8]) -> Result<Self> {
        let (r, s) = der::decode_signature_sequence(bytes)?;
        Ok(Self { r, s })
    }
}
