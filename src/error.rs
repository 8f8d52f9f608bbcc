//! Error types.

use core::fmt::{self, Display};

/// Result type alias specialized to [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Core error type.
///
/// None of the variants carry caller-controlled data beyond what is needed
/// to distinguish the failure; the string detail a caller wants for
/// diagnostics should come from `Display`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Point bytes failed a length, prefix, range, parity, or on-curve check.
    MalformedPoint,

    /// A DER structure failed a tag, length, or value check (bad tag,
    /// non-minimal length, trailing bytes, unexpected OID, wrong version
    /// INTEGER).
    MalformedEncoding,

    /// Signature bytes failed their decoder.
    MalformedSignature,

    /// Digest is longer than the curve's `baselen`.
    BadDigest,

    /// Signature was well-formed but did not verify.
    BadSignature,

    /// Signing produced `r = 0` or `s = 0`.
    ///
    /// The deterministic signing loop recovers from this internally by
    /// retrying with a fresh `k`; the random-`k` signing path surfaces it
    /// to the caller (see `SigningKey::sign`).
    RsZero,

    /// `square_root_mod_prime` was called on a value with no square root
    /// modulo the given prime.
    NonResidue,

    /// A secret scalar or an RFC 6979 candidate `k` was outside `[1, n-1]`.
    ///
    /// This is an internal arithmetic precondition violation; it should
    /// never be observable through the public API except as the inner
    /// cause of `RsZero`-adjacent retries.
    OutOfRange,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::MalformedPoint => "malformed point encoding",
            Error::MalformedEncoding => "malformed DER encoding",
            Error::MalformedSignature => "malformed signature encoding",
            Error::BadDigest => "digest too long for curve",
            Error::BadSignature => "signature verification failed",
            Error::RsZero => "signing produced r = 0 or s = 0",
            Error::NonResidue => "value has no modular square root",
            Error::OutOfRange => "scalar out of range [1, n-1]",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
