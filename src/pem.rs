//! PEM armoring: wraps DER bytes between `-----BEGIN <LABEL>-----` and
//! `-----END <LABEL>-----` lines, base64-encoded at 64 columns.

use base64ct::{Base64, Encoding};

use crate::error::{Error, Result};

/// Label for an SPKI-encoded public key.
pub const LABEL_PUBLIC_KEY: &str = "PUBLIC KEY";
/// Label for a SEC1-encoded private key.
pub const LABEL_EC_PRIVATE_KEY: &str = "EC PRIVATE KEY";

const WRAP_WIDTH: usize = 64;

/// Armor `der` as PEM under the given label.
pub fn encode(label: &str, der: &[u8]) -> String {
    let body = Base64::encode_string(der);
    let mut out = String::with_capacity(body.len() + body.len() / WRAP_WIDTH + 64);
    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");
    for chunk in body.as_bytes().chunks(WRAP_WIDTH) {
        out.push_str(core::str::from_utf8(chunk).expect("base64 output is ASCII"));
        out.push('\n');
    }
    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Recover DER bytes from PEM text.
///
/// Only the `BEGIN <label>`/`END <label>` block is inspected; any
/// preceding block (such as an `EC PARAMETERS` block before a SEC1
/// private key) is tolerated and ignored, since the search simply skips
/// past whatever precedes the matching `BEGIN` marker.
pub fn decode(label: &str, text: &str) -> Result<Vec<u8>> {
    let begin_marker = alloc_format(label, "BEGIN");
    let end_marker = alloc_format(label, "END");

    let begin_at = text.find(&begin_marker).ok_or(Error::MalformedEncoding)?;
    let body_start = begin_at + begin_marker.len();
    let relative_end = text[body_start..].find(&end_marker).ok_or(Error::MalformedEncoding)?;
    let body = &text[body_start..body_start + relative_end];

    let cleaned: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    Base64::decode_vec(&cleaned).map_err(|_| Error::MalformedEncoding)
}

fn alloc_format(label: &str, which: &str) -> String {
    let mut s = String::with_capacity(11 + which.len() + label.len());
    s.push_str("-----");
    s.push_str(which);
    s.push(' ');
    s.push_str(label);
    s.push_str("-----");
    s
}
