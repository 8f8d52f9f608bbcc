//! The `VerifyingKey` façade: a validated public point plus the digest
//! algorithm it is used with, exposing construction from every wire
//! format and the corresponding serializers.

use num_bigint::BigUint;

use crate::curve::{CurveParams, Point};
#[cfg(feature = "der")]
use crate::der;
use crate::digest::Digest;
use crate::ecdsa;
use crate::error::{Error, Result};
#[cfg(feature = "pem")]
use crate::pem;
use crate::sec1::{self, Encoding};
use crate::signature::Signature;

/// A public key for a fixed curve, paired with the digest algorithm `H`
/// it verifies signatures under.
pub struct VerifyingKey<'c, H> {
    curve: &'c CurveParams,
    point: Point<'c>,
    _digest: core::marker::PhantomData<H>,
}

impl<'c, H: Digest> VerifyingKey<'c, H> {
    /// Wrap an already-valid public point. `P` is assumed to satisfy
    /// [`crate::curve::point_is_valid`]; this constructor does not re-check it.
    pub fn from_public_point(point: Point<'c>) -> Self {
        Self {
            curve: point.curve(),
            point,
            _digest: core::marker::PhantomData,
        }
    }

    /// Decode a SEC1 point encoding (raw/uncompressed/compressed/hybrid,
    /// dispatched by length and prefix byte).
    pub fn from_string(bytes: &[u8], curve: &'c CurveParams, validate: bool) -> Result<Self> {
        let point = sec1::decode(bytes, curve, validate)?;
        Ok(Self::from_public_point(point))
    }

    /// Parse an X.509 `SubjectPublicKeyInfo`. The curve is determined by
    /// the embedded OID, looked up in `curves::by_oid`.
    #[cfg(feature = "der")]
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let (oid, point_bytes) = der::decode_subject_public_key_info(bytes)?;
        let curve = crate::curves::by_oid(&oid).map_err(|_| Error::MalformedEncoding)?;
        let point = sec1::decode(&point_bytes, curve, true)?;
        Ok(Self::from_public_point(point))
    }

    /// Parse a PEM-armored `PUBLIC KEY` block.
    #[cfg(feature = "pem")]
    pub fn from_pem(text: &str) -> Result<Self> {
        let der_bytes = pem::decode(pem::LABEL_PUBLIC_KEY, text)?;
        Self::from_der(&der_bytes)
    }

    pub fn curve(&self) -> &'c CurveParams {
        self.curve
    }

    pub fn point(&self) -> &Point<'c> {
        &self.point
    }

    /// Encode the public point in the given SEC1 form.
    pub fn to_string_encoding(&self, encoding: Encoding) -> Vec<u8> {
        sec1::encode(&self.point, encoding)
    }

    /// Encode as an X.509 `SubjectPublicKeyInfo`; `encoding` selects the
    /// point form embedded inside (uncompressed by default at the call
    /// site, but any SEC1 form is accepted here).
    #[cfg(feature = "der")]
    pub fn to_der(&self, encoding: Encoding) -> Vec<u8> {
        let point_bytes = sec1::encode(&self.point, encoding);
        der::encode_subject_public_key_info(self.curve.oid, &point_bytes)
    }

    #[cfg(feature = "pem")]
    pub fn to_pem(&self, encoding: Encoding) -> String {
        pem::encode(pem::LABEL_PUBLIC_KEY, &self.to_der(encoding))
    }

    /// Verify a signature over `message`, hashing it with `H` first.
    pub fn verify(&self, message: &[u8], sig_bytes: &[u8], decode_sig: SigDecoder) -> Result<bool> {
        let digest = H::digest(message).to_vec();
        self.verify_digest(&digest, sig_bytes, decode_sig)
    }

    /// Verify a signature over an already-computed digest.
    ///
    /// Fails with [`Error::BadDigest`] if `digest` is longer than the
    /// curve's `baselen`.
    pub fn verify_digest(&self, digest: &[u8], sig_bytes: &[u8], decode_sig: SigDecoder) -> Result<bool> {
        if digest.len() > self.curve.baselen() {
            return Err(Error::BadDigest);
        }
        let sig = decode_sig(sig_bytes, self.curve.baselen())?;
        let e = ecdsa::digest_to_scalar(self.curve, digest);
        match ecdsa::verify(self.curve, &self.point, &sig.r, &sig.s, &e) {
            Ok(()) => Ok(true),
            Err(Error::BadSignature) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// Recover every candidate public key that verifies a signature over
    /// `message`, hashing it with `H` first.
    #[cfg(feature = "recovery")]
    pub fn from_public_key_recovery(
        sig_bytes: &[u8],
        message: &[u8],
        curve: &'c CurveParams,
        decode_sig: SigDecoder,
    ) -> Result<Vec<Self>> {
        let digest = H::digest(message).to_vec();
        Self::from_public_key_recovery_with_digest(sig_bytes, &digest, curve, decode_sig)
    }

    /// Recover every candidate public key consistent with a signature over
    /// an already-computed digest (spec.md §4.5/§8).
    ///
    /// Tries the four `(j, y-parity)` candidates in
    /// [`crate::ecdsa::recover_public_keys`]'s fixed order and returns
    /// every candidate whose point is valid and verifies `(r, s)` against
    /// `digest`, wrapped as [`VerifyingKey`]s ready for
    /// [`Self::verify_digest`].
    ///
    /// Fails with [`Error::BadDigest`] if `digest` is longer than the
    /// curve's `baselen`.
    #[cfg(feature = "recovery")]
    pub fn from_public_key_recovery_with_digest(
        sig_bytes: &[u8],
        digest: &[u8],
        curve: &'c CurveParams,
        decode_sig: SigDecoder,
    ) -> Result<Vec<Self>> {
        if digest.len() > curve.baselen() {
            return Err(Error::BadDigest);
        }
        let sig = decode_sig(sig_bytes, curve.baselen())?;
        let e = ecdsa::digest_to_scalar(curve, digest);
        let points = ecdsa::recover_public_keys(curve, &sig.r, &sig.s, &e)?;
        Ok(points.into_iter().map(Self::from_public_point).collect())
    }
}

impl<H> PartialEq for VerifyingKey<'_, H> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

/// A pluggable signature decoder: `decode(bytes, baselen) -> Signature`.
/// The two built-in forms are [`decode_string_signature`] and
/// [`decode_der_signature`].
pub type SigDecoder = fn(&[u8], usize) -> Result<Signature>;

pub fn decode_string_signature(bytes: &[u8], baselen: usize) -> Result<Signature> {
    Signature::from_string_encoding(bytes, baselen)
}

#[cfg(feature = "der")]
pub fn decode_der_signature(bytes: &[u8], _baselen: usize) -> Result<Signature> {
    Signature::from_der_encoding(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;
    #[cfg(feature = "signing")]
    use crate::signing_key::SigningKey;
    use sha2::Sha256;

    #[test]
    #[cfg(all(feature = "der", feature = "signing"))]
    fn point_round_trips_through_spki() {
        let curve = curves::secp256k1();
        let signing_key = SigningKey::<Sha256>::from_secret_exponent(BigUint::from(42u32), curve).unwrap();
        let vk = signing_key.verifying_key();

        let der = vk.to_der(Encoding::Uncompressed);
        let decoded = VerifyingKey::<Sha256>::from_der(&der).unwrap();
        assert!(decoded == *vk);
    }

    #[test]
    #[cfg(all(feature = "pem", feature = "signing"))]
    fn pem_round_trip() {
        let curve = curves::nistp256();
        let signing_key = SigningKey::<Sha256>::from_secret_exponent(BigUint::from(7u32), curve).unwrap();
        let vk = signing_key.verifying_key();

        let pem = vk.to_pem(Encoding::Compressed);
        let decoded = VerifyingKey::<Sha256>::from_pem(&pem).unwrap();
        assert!(decoded == *vk);
    }

    #[test]
    #[cfg(all(feature = "recovery", feature = "signing"))]
    fn recovery_through_public_facade_contains_true_signer() {
        let curve = curves::secp256k1();
        let signing_key = SigningKey::<Sha256>::from_secret_exponent(BigUint::from(13579u32), curve).unwrap();
        let vk = signing_key.verifying_key();

        let message = b"recover me";
        let sig_bytes = signing_key
            .sign_digest_deterministic(&Sha256::digest(message), crate::signing_key::encode_string_signature, &[])
            .unwrap();

        let candidates =
            VerifyingKey::<Sha256>::from_public_key_recovery(&sig_bytes, message, curve, decode_string_signature)
                .unwrap();
        assert!(candidates.iter().any(|cand| *cand == vk));
        for cand in &candidates {
            assert!(cand.verify(message, &sig_bytes, decode_string_signature).unwrap());
        }
    }
}
