#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod arith;
pub mod bytes;
pub mod curve;
pub mod curves;
pub mod digest;
pub mod error;
pub mod rand;
pub mod rfc6979;
pub mod sec1;
pub mod signature;

mod ecdsa;

#[cfg(feature = "dev")]
pub mod dev;

#[cfg(feature = "der")]
pub mod der;

#[cfg(feature = "pem")]
pub mod pem;

#[cfg(feature = "signing")]
pub mod signing_key;

#[cfg(feature = "verifying")]
pub mod verifying_key;

#[cfg(feature = "recovery")]
pub use ecdsa::recover_public_keys;

pub use curve::{CurveParams, Point};
pub use error::{Error, Result};
pub use signature::Signature;

#[cfg(feature = "signing")]
pub use signing_key::SigningKey;

#[cfg(feature = "verifying")]
pub use verifying_key::VerifyingKey;
