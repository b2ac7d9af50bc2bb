//! # ecring
//! A library that implements non-linkable [Ring Signatures](https://en.wikipedia.org/wiki/Ring_signature)
//! over the NIST P-256 and P-384 elliptic curves.
//!
//! A signer holding one private key out of an ordered ring of public keys produces a signature
//! that proves *some* member of the ring signed the message, without revealing which one. The
//! scheme is the cyclic challenge chain of Abe, Ohkubo and Suzuki, the same construction as the
//! Spontaneous Anonymous Group (SAG) signatures of
//! [Chapter 3 of Zero to Monero 2.0](https://www.getmonero.org/library/Zero-to-Monero-2-0-0.pdf).
//!
//!  - Keys are raw byte strings: SEC1 uncompressed points and big-endian scalars
//!  - Challenges are SHA-256 over `message ‖ point`, see [`ChallengeHash`]
//!  - All ring members have to share one [`Curve`], mismatches are reported as errors
//!
//! ```
//! use ecring::{generate_key_pair, sign, verify, Curve};
//!
//! let keys: Vec<_> = (0..3)
//!     .map(|_| generate_key_pair(Curve::default()).unwrap())
//!     .collect();
//! let ring = keys.iter().map(|(public, _)| public.clone()).collect();
//!
//! let signature = sign(b"test message", ring, 0, &keys[0].1).unwrap();
//! assert!(verify(&signature, b"test message"));
//! assert!(!verify(&signature, b"tampered"));
//! ```
//!
//!  This library is `#![no_std]` by default, it only needs `alloc`.

#![no_std]
#[macro_use]
extern crate alloc;
extern crate digest;
extern crate elliptic_curve;
extern crate rand_core;

pub mod curve;
pub mod encoding;
pub mod error;
pub mod keys;
mod prelude;
pub mod primitives;
pub mod sag;
pub mod traits;

pub use curve::Curve;
pub use encoding::{
    decode_bytes, decode_private_key, decode_public_key, encode_bytes, encode_private_key,
    encode_public_key,
};
pub use error::{Error, Result};
pub use keys::{generate_key_pair, generate_key_pair_with_rng, PrivateKey, PublicKey};
pub use primitives::ChallengeHash;
pub use sag::{sign, sign_with_rng, verify, SAG};
pub use traits::{Sign, Verify};
