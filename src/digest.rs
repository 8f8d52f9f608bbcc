//! Digest interface: anything that reduces a message to a fixed-length
//! byte string. The core only requires referential transparency -- the
//! same input always yields the same output -- which is exactly what
//! [`digest::Digest`] guarantees, so this module just re-exports the
//! pieces the rest of the crate needs rather than defining a new trait.

pub use digest::Digest;

/// Hash `message` with `D` and return the raw digest bytes.
pub fn digest<D: Digest>(message: &[u8]) -> Vec<u8> {
    D::digest(message).to_vec()
}
