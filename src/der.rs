//! Minimal ASN.1 DER encoder/decoder for the two structures this crate
//! needs: SEC1 `ECPrivateKey` and X.509 `SubjectPublicKeyInfo`.
//!
//! This is not a general-purpose ASN.1 library: it supports exactly the
//! primitives (`SEQUENCE`, `INTEGER`, `OCTET STRING`, `OBJECT IDENTIFIER`,
//! `BIT STRING`, and context-tagged `[n]` elements) those two structures
//! use, encoded and decoded under strict DER rules -- definite, minimal
//! lengths only, no superfluous `INTEGER` padding, no trailing junk.

use num_bigint::BigUint;

use crate::error::{Error, Result};

const TAG_INTEGER: u8 = 0x02;
const TAG_BIT_STRING: u8 = 0x03;
const TAG_OCTET_STRING: u8 = 0x04;
const TAG_OID: u8 = 0x06;
const TAG_SEQUENCE: u8 = 0x30;

fn encode_length(len: usize, out: &mut Vec<u8>) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let len_bytes = len.to_be_bytes();
    let first_nonzero = len_bytes.iter().position(|&b| b != 0).unwrap_or(len_bytes.len() - 1);
    let significant = &len_bytes[first_nonzero..];
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
}

fn encode_tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() + 4);
    out.push(tag);
    encode_length(value.len(), &mut out);
    out.extend_from_slice(value);
    out
}

/// Encode a non-negative integer as a DER `INTEGER`, prepending a `0x00`
/// byte when the high bit of the minimal big-endian representation would
/// otherwise be set (which DER would read as negative).
pub fn encode_integer(n: &BigUint) -> Vec<u8> {
    let mut bytes = n.to_bytes_be();
    if bytes.is_empty() {
        bytes.push(0);
    }
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    encode_tlv(TAG_INTEGER, &bytes)
}

pub fn encode_octet_string(bytes: &[u8]) -> Vec<u8> {
    encode_tlv(TAG_OCTET_STRING, bytes)
}

pub fn encode_bit_string(bytes: &[u8], unused_bits: u8) -> Vec<u8> {
    let mut value = Vec::with_capacity(1 + bytes.len());
    value.push(unused_bits);
    value.extend_from_slice(bytes);
    encode_tlv(TAG_BIT_STRING, &value)
}

pub fn encode_oid(arcs: &[u64]) -> Vec<u8> {
    assert!(arcs.len() >= 2, "an OID needs at least two arcs");
    let mut value = Vec::new();
    value.push((arcs[0] * 40 + arcs[1]) as u8);
    for &arc in &arcs[2..] {
        let mut chunks = Vec::new();
        let mut n = arc;
        chunks.push((n & 0x7f) as u8);
        n >>= 7;
        while n > 0 {
            chunks.push((n & 0x7f) as u8 | 0x80);
            n >>= 7;
        }
        chunks.reverse();
        value.extend_from_slice(&chunks);
    }
    encode_tlv(TAG_OID, &value)
}

/// Wrap already-encoded child TLVs in a `SEQUENCE`.
pub fn encode_sequence(children: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = children.iter().map(Vec::len).sum();
    let mut value = Vec::with_capacity(total);
    for child in children {
        value.extend_from_slice(child);
    }
    encode_tlv(TAG_SEQUENCE, &value)
}

/// Wrap already-encoded child TLVs in a constructed, context-tagged
/// `[tag_num]` element (as SEC1 `ECPrivateKey`'s `[0]`/`[1]` fields use).
pub fn encode_context(tag_num: u8, children: &[Vec<u8>]) -> Vec<u8> {
    assert!(tag_num < 0x1f, "high tag numbers are not needed here");
    let total: usize = children.iter().map(Vec::len).sum();
    let mut value = Vec::with_capacity(total);
    for child in children {
        value.extend_from_slice(child);
    }
    encode_tlv(0xa0 | tag_num, &value)
}

/// A single parsed tag-length-value element.
struct Tlv<'a> {
    tag: u8,
    value: &'a [u8],
}

/// Parse one TLV off the front of `input`, returning it and the remaining
/// bytes. Enforces DER's definite-length, minimal-length-encoding rule:
/// indefinite lengths (`0x80`) are rejected, as is any long-form length
/// whose encoding is not the shortest possible.
fn parse_tlv(input: &[u8]) -> Result<(Tlv<'_>, &[u8])> {
    if input.len() < 2 {
        return Err(Error::MalformedEncoding);
    }
    let tag = input[0];
    let (len, rest) = if input[1] & 0x80 == 0 {
        (input[1] as usize, &input[2..])
    } else {
        let n_bytes = (input[1] & 0x7f) as usize;
        if n_bytes == 0 {
            // indefinite length, BER-only, not valid DER.
            return Err(Error::MalformedEncoding);
        }
        if input.len() < 2 + n_bytes {
            return Err(Error::MalformedEncoding);
        }
        let len_bytes = &input[2..2 + n_bytes];
        if len_bytes[0] == 0 {
            return Err(Error::MalformedEncoding);
        }
        if n_bytes > core::mem::size_of::<usize>() {
            return Err(Error::MalformedEncoding);
        }
        let mut len = 0usize;
        for &b in len_bytes {
            len = (len << 8) | b as usize;
        }
        if len < 0x80 {
            // should have used short form.
            return Err(Error::MalformedEncoding);
        }
        (len, &input[2 + n_bytes..])
    };
    if rest.len() < len {
        return Err(Error::MalformedEncoding);
    }
    Ok((Tlv { tag, value: &rest[..len] }, &rest[len..]))
}

fn expect_tag<'a>(tlv: Tlv<'a>, tag: u8) -> Result<&'a [u8]> {
    if tlv.tag != tag {
        return Err(Error::MalformedEncoding);
    }
    Ok(tlv.value)
}

/// Parse an outer TLV and require that it consumes the entire input: DER
/// structures here must not be followed by trailing junk.
fn parse_tlv_exact(input: &[u8]) -> Result<Tlv<'_>> {
    let (tlv, rest) = parse_tlv(input)?;
    if !rest.is_empty() {
        return Err(Error::MalformedEncoding);
    }
    Ok(tlv)
}

/// Decode a DER `INTEGER` value (the content octets, tag already
/// stripped) as a non-negative big integer. Rejects an empty encoding,
/// a negative value (high bit set without justification), and a
/// superfluous leading zero byte.
pub fn decode_integer(value: &[u8]) -> Result<BigUint> {
    if value.is_empty() {
        return Err(Error::MalformedEncoding);
    }
    if value.len() > 1 && value[0] == 0x00 && value[1] & 0x80 == 0 {
        return Err(Error::MalformedEncoding);
    }
    if value[0] & 0x80 != 0 {
        return Err(Error::MalformedEncoding);
    }
    Ok(BigUint::from_bytes_be(value))
}

/// Decode a DER `SEQUENCE { INTEGER r, INTEGER s }`, as used for
/// ECDSA-Sig-Value. Rejects trailing junk after the sequence.
pub fn decode_signature_sequence(input: &[u8]) -> Result<(BigUint, BigUint)> {
    let body = expect_tag(parse_tlv_exact(input)?, TAG_SEQUENCE)?;
    let (r_tlv, rest) = parse_tlv(body)?;
    let r = decode_integer(expect_tag(r_tlv, TAG_INTEGER)?)?;
    let (s_tlv, rest) = parse_tlv(rest)?;
    let s = decode_integer(expect_tag(s_tlv, TAG_INTEGER)?)?;
    if !rest.is_empty() {
        return Err(Error::MalformedEncoding);
    }
    Ok((r, s))
}

fn decode_oid(value: &[u8]) -> Result<Vec<u64>> {
    if value.is_empty() {
        return Err(Error::MalformedEncoding);
    }
    let mut arcs = Vec::new();
    arcs.push((value[0] / 40) as u64);
    arcs.push((value[0] % 40) as u64);

    let mut acc: u64 = 0;
    let mut in_progress = false;
    for &b in &value[1..] {
        in_progress = true;
        acc = acc
            .checked_shl(7)
            .and_then(|a| a.checked_add((b & 0x7f) as u64))
            .ok_or(Error::MalformedEncoding)?;
        if b & 0x80 == 0 {
            arcs.push(acc);
            acc = 0;
            in_progress = false;
        }
    }
    if in_progress {
        return Err(Error::MalformedEncoding);
    }
    Ok(arcs)
}

/// SEC1 `ECPrivateKey`, parsed.
pub struct EcPrivateKey {
    /// Raw `privateKey` octets, exactly as stored (may be shorter than a
    /// curve's `baselen`; callers left-pad as needed).
    pub private_key: Vec<u8>,
    /// `[0] namedCurve` OID arcs, if present.
    pub named_curve: Option<Vec<u64>>,
}

/// Encode a SEC1 `ECPrivateKey`:
/// `SEQUENCE { INTEGER 1, OCTET STRING privateKey, [0] OID namedCurve, [1] BIT STRING publicKey }`.
///
/// `private_key` must already be exactly `baselen` bytes, big-endian,
/// left-padded; `public_key_point` is the uncompressed SEC1 encoding of
/// `Q`.
pub fn encode_ec_private_key(private_key: &[u8], curve_oid: &[u64], public_key_point: &[u8]) -> Vec<u8> {
    let version = encode_integer(&BigUint::from(1u32));
    let key = encode_octet_string(private_key);
    let named_curve = encode_context(0, &[encode_oid(curve_oid)]);
    let public_key = encode_context(1, &[encode_bit_string(public_key_point, 0)]);
    encode_sequence(&[version, key, named_curve, public_key])
}

/// Decode a SEC1 `ECPrivateKey`. The `[1]` public-key field, if present,
/// is parsed far enough to skip over but its contents are not returned;
/// callers recompute `Q = d*G` themselves.
pub fn decode_ec_private_key(input: &[u8]) -> Result<EcPrivateKey> {
    let body = expect_tag(parse_tlv_exact(input)?, TAG_SEQUENCE)?;

    let (version_tlv, rest) = parse_tlv(body)?;
    let version = decode_integer(expect_tag(version_tlv, TAG_INTEGER)?)?;
    if version != BigUint::from(1u32) {
        return Err(Error::MalformedEncoding);
    }

    let (key_tlv, mut rest) = parse_tlv(rest)?;
    let private_key = expect_tag(key_tlv, TAG_OCTET_STRING)?.to_vec();

    let mut named_curve = None;
    while !rest.is_empty() {
        let (tlv, remainder) = parse_tlv(rest)?;
        match tlv.tag {
            0xa0 => {
                let (oid_tlv, oid_rest) = parse_tlv(tlv.value)?;
                if !oid_rest.is_empty() {
                    return Err(Error::MalformedEncoding);
                }
                named_curve = Some(decode_oid(expect_tag(oid_tlv, TAG_OID)?)?);
            }
            0xa1 => {
                // [1] publicKey BIT STRING: validated structurally, not decoded.
                let (bits_tlv, bits_rest) = parse_tlv(tlv.value)?;
                if !bits_rest.is_empty() {
                    return Err(Error::MalformedEncoding);
                }
                expect_tag(bits_tlv, TAG_BIT_STRING)?;
            }
            _ => return Err(Error::MalformedEncoding),
        }
        rest = remainder;
    }

    Ok(EcPrivateKey { private_key, named_curve })
}

/// `id-ecPublicKey` (1.2.840.10045.2.1), the algorithm identifier OID
/// every `SubjectPublicKeyInfo` this crate produces uses.
pub const ID_EC_PUBLIC_KEY: &[u64] = &[1, 2, 840, 10045, 2, 1];

/// Encode an X.509 `SubjectPublicKeyInfo`:
/// `SEQUENCE { SEQUENCE { OID id-ecPublicKey, OID namedCurve }, BIT STRING point }`.
pub fn encode_subject_public_key_info(curve_oid: &[u64], point: &[u8]) -> Vec<u8> {
    let alg_id = encode_sequence(&[encode_oid(ID_EC_PUBLIC_KEY), encode_oid(curve_oid)]);
    let point_bits = encode_bit_string(point, 0);
    encode_sequence(&[alg_id, point_bits])
}

/// Decode a `SubjectPublicKeyInfo`, returning the named-curve OID arcs
/// and the raw (still SEC1-encoded) point bytes.
pub fn decode_subject_public_key_info(input: &[u8]) -> Result<(Vec<u64>, Vec<u8>)> {
    let body = expect_tag(parse_tlv_exact(input)?, TAG_SEQUENCE)?;

    let (alg_id_tlv, rest) = parse_tlv(body)?;
    let alg_id_body = expect_tag(alg_id_tlv, TAG_SEQUENCE)?;
    let (alg_oid_tlv, alg_rest) = parse_tlv(alg_id_body)?;
    let alg_oid = decode_oid(expect_tag(alg_oid_tlv, TAG_OID)?)?;
    if alg_oid != ID_EC_PUBLIC_KEY {
        return Err(Error::MalformedEncoding);
    }
    let (curve_oid_tlv, alg_rest) = parse_tlv(alg_rest)?;
    if !alg_rest.is_empty() {
        return Err(Error::MalformedEncoding);
    }
    let curve_oid = decode_oid(expect_tag(curve_oid_tlv, TAG_OID)?)?;

    let (point_tlv, rest) = parse_tlv(rest)?;
    if !rest.is_empty() {
        return Err(Error::MalformedEncoding);
    }
    let bit_string = expect_tag(point_tlv, TAG_BIT_STRING)?;
    if bit_string.is_empty() || bit_string[0] != 0 {
        // unused-bits count must be zero: a point encoding is always a
        // whole number of bytes.
        return Err(Error::MalformedEncoding);
    }
    Ok((curve_oid, bit_string[1..].to_vec()))
}
