//! RFC 6979 deterministic-signature test vectors and end-to-end
//! sign/verify/serialization round trips exercised through the public
//! façade types.

use ecdsa_core::curves;
use ecdsa_core::signing_key::{encode_der_signature, encode_string_signature, SigningKey};
use ecdsa_core::verifying_key::{decode_der_signature, decode_string_signature, VerifyingKey};
use num_bigint::BigUint;
use sha2::Sha256;

/// RFC 6979 Appendix A.2.5: NIST P-256, SHA-256, message "sample".
#[test]
fn rfc6979_appendix_a2_5_p256_sample() {
    let curve = curves::nistp256();
    let d = BigUint::parse_bytes(
        b"c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
        16,
    )
    .unwrap();
    let sk = SigningKey::<Sha256>::from_secret_exponent(d, curve).unwrap();

    let sig_bytes = sk.sign_deterministic(b"sample", encode_string_signature, &[]).unwrap();
    let r = BigUint::from_bytes_be(&sig_bytes[..curve.baselen()]);
    let expected_r =
        BigUint::parse_bytes(b"efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716", 16).unwrap();
    assert_eq!(r, expected_r);
}

/// RFC 6979 Appendix A.2.1: NIST P-192, SHA-256, message "sample".
///
/// `baselen` for P-192 is 24 bytes, smaller than a single SHA-256 block
/// (32 bytes), so this vector alone would not catch an HMAC_DRBG that
/// reseeds `K`/`V` too often between blocks of the same candidate.
#[test]
fn rfc6979_appendix_a2_1_p192_sample() {
    let curve = curves::nistp192();
    let d = BigUint::parse_bytes(b"6fab034934e4c0fc9ae67f5b5659a9d7d1fefd187ee09fd4", 16).unwrap();
    let sk = SigningKey::<Sha256>::from_secret_exponent(d, curve).unwrap();

    let sig_bytes = sk.sign_deterministic(b"sample", encode_string_signature, &[]).unwrap();
    let r = BigUint::from_bytes_be(&sig_bytes[..curve.baselen()]);
    let s = BigUint::from_bytes_be(&sig_bytes[curve.baselen()..]);
    let expected_r = BigUint::parse_bytes(b"4b0b8ce98a92866a2820e20aa6b75b56382e0f9bfd5ecb55", 16).unwrap();
    let expected_s = BigUint::parse_bytes(b"ccdb006926ea9565cbadc840829d8c384e06de1f1e381b85", 16).unwrap();
    assert_eq!(r, expected_r);
    assert_eq!(s, expected_s);
}

/// RFC 6979 Appendix A.2.2: NIST P-224, SHA-256, message "sample".
#[test]
fn rfc6979_appendix_a2_2_p224_sample() {
    let curve = curves::nistp224();
    let d = BigUint::parse_bytes(b"f220266e1105bfe3083e03ec7a3a654651f45e37167e88600bf257c", 16).unwrap();
    let sk = SigningKey::<Sha256>::from_secret_exponent(d, curve).unwrap();

    let sig_bytes = sk.sign_deterministic(b"sample", encode_string_signature, &[]).unwrap();
    let r = BigUint::from_bytes_be(&sig_bytes[..curve.baselen()]);
    let s = BigUint::from_bytes_be(&sig_bytes[curve.baselen()..]);
    let expected_r =
        BigUint::parse_bytes(b"f08f7617a812ce1882014b40ab1694856693847a4521005f3da3175d", 16).unwrap();
    let expected_s =
        BigUint::parse_bytes(b"851186a596ad9438ba1b9bac6d818de5e6e77be70aba64ec88e03b7d", 16).unwrap();
    assert_eq!(r, expected_r);
    assert_eq!(s, expected_s);
}

/// RFC 6979 Appendix A.2.6: NIST P-384, SHA-256, message "sample".
///
/// `baselen` for P-384 is 48 bytes, spanning two SHA-256 blocks per
/// candidate -- this is the case the multi-block `HMAC_DRBG` reseed bug
/// actually changes `k` for.
#[test]
fn rfc6979_appendix_a2_6_p384_sample() {
    let curve = curves::nistp384();
    let d = BigUint::parse_bytes(
        b"6b9d3dad2e1b8c1c05b19875b6659f4de23c3b667bf297ba9aa47740787137d896d5724e4c70d8598091a15e51b7b6f",
        16,
    )
    .unwrap();
    let sk = SigningKey::<Sha256>::from_secret_exponent(d, curve).unwrap();

    let sig_bytes = sk.sign_deterministic(b"sample", encode_string_signature, &[]).unwrap();
    let r = BigUint::from_bytes_be(&sig_bytes[..curve.baselen()]);
    let s = BigUint::from_bytes_be(&sig_bytes[curve.baselen()..]);
    let expected_r = BigUint::parse_bytes(
        b"b223a1d2f66d2b8e14bcee519c4d8eec567fc13d6bd270b29980a721a73be940105cfed41ed84ff4c10cf7d4a1a09f6c",
        16,
    )
    .unwrap();
    let expected_s = BigUint::parse_bytes(
        b"4e34c55086b18696a74b1f7bccaeffe9aaeb40ddbc2d5a7873d1bf542efd72ed40bcc09cd5ecafceb7f519a76e1f5314",
        16,
    )
    .unwrap();
    assert_eq!(r, expected_r);
    assert_eq!(s, expected_s);
}

/// RFC 6979 Appendix A.2.7: NIST P-521, SHA-256, message "sample".
///
/// `baselen` for P-521 is 66 bytes, spanning three SHA-256 blocks per
/// candidate -- the other case the multi-block reseed bug changes `k`
/// for.
#[test]
fn rfc6979_appendix_a2_7_p521_sample() {
    let curve = curves::nistp521();
    let d = BigUint::parse_bytes(
        b"0fad06daa62ba3b25d2fb40133da757205de67f5bb0018fee8c86e1b68c7e75caa896eb32f1f47c70855836a6d16fcc1466f6d8fbec67db89ec0c08b0e996b83538",
        16,
    )
    .unwrap();
    let sk = SigningKey::<Sha256>::from_secret_exponent(d, curve).unwrap();

    let sig_bytes = sk.sign_deterministic(b"sample", encode_string_signature, &[]).unwrap();
    let r = BigUint::from_bytes_be(&sig_bytes[..curve.baselen()]);
    let s = BigUint::from_bytes_be(&sig_bytes[curve.baselen()..]);
    let expected_r = BigUint::parse_bytes(
        b"1511bb4d675114fe266fc4372b87682baecc01d3cc62cf2303c92b3526012659d16876e25c7c1e57648f23b73564d67f61c6f14d527d54972810421e7d87589e1a7",
        16,
    )
    .unwrap();
    let expected_s = BigUint::parse_bytes(
        b"4a171143a83163d6df460aaf61522695f207a58b95c0644d87e52aa1a347916e4f7a72930b1bc06dbe22ce3f58264afd23704cbb63b29b931f7de6c9d949a7ecfc",
        16,
    )
    .unwrap();
    assert_eq!(r, expected_r);
    assert_eq!(s, expected_s);
}

#[test]
fn sign_verify_round_trip_string_encoding() {
    let curve = curves::secp256k1();
    let sk = SigningKey::<Sha256>::from_secret_exponent(BigUint::from(98765432123u64), curve).unwrap();
    let vk = sk.verifying_key();

    let sig = sk.sign_deterministic(b"integration test message", encode_string_signature, &[]).unwrap();
    assert!(vk
        .verify(b"integration test message", &sig, decode_string_signature)
        .unwrap());
}

#[test]
fn sign_verify_round_trip_der_encoding() {
    let curve = curves::nistp384();
    let sk = SigningKey::<Sha256>::from_secret_exponent(BigUint::from(55555u32), curve).unwrap();
    let vk = sk.verifying_key();

    let sig = sk.sign_deterministic(b"der encoded message", encode_der_signature, &[]).unwrap();
    assert!(vk.verify(b"der encoded message", &sig, decode_der_signature).unwrap());
}

#[test]
fn tampered_message_fails_verification() {
    let curve = curves::nistp256();
    let sk = SigningKey::<Sha256>::from_secret_exponent(BigUint::from(424242u32), curve).unwrap();
    let vk = sk.verifying_key();

    let sig = sk.sign_deterministic(b"original", encode_string_signature, &[]).unwrap();
    assert!(!vk.verify(b"tampered", &sig, decode_string_signature).unwrap());
}

#[test]
fn key_der_and_pem_round_trip_across_curves() {
    for curve in curves::all() {
        let sk = SigningKey::<Sha256>::from_secret_exponent(BigUint::from(31337u32), curve).unwrap();
        let der = sk.to_der();
        let decoded = SigningKey::<Sha256>::from_der(&der, curve).unwrap();
        assert!(decoded.verifying_key() == sk.verifying_key());

        let pem = sk.to_pem();
        let decoded_pem = SigningKey::<Sha256>::from_pem(&pem, curve).unwrap();
        assert!(decoded_pem.verifying_key() == sk.verifying_key());

        let vk_pem = sk.verifying_key().to_pem(ecdsa_core::sec1::Encoding::Uncompressed);
        let decoded_vk = VerifyingKey::<Sha256>::from_pem(&vk_pem).unwrap();
        assert!(decoded_vk == sk.verifying_key());
    }
}
