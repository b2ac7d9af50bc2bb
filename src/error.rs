use crate::curve::Curve;
use thiserror::Error;

/// Specialisation of `core::result::Result` for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while generating keys, signing or decoding key material.
///
/// A signature that fails to verify is not an error, [`crate::Verify::verify`] reports it as
/// `false`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("a non-empty message is required for signing")]
    EmptyMessage,

    #[error("signer index {index} is outside of a ring with {ring_size} members")]
    SignerIndexOutOfRange { index: usize, ring_size: usize },

    #[error("ring too small: {size} members, at least two are required")]
    RingTooSmall { size: usize },

    #[error("ring member {index} is a {found} key, expected {expected}")]
    CurveMismatch {
        index: usize,
        expected: Curve,
        found: Curve,
    },

    #[error("ring member {index} is not a valid public key")]
    InvalidPublicKey { index: usize },

    #[error("ring member {index} is not the public key of the signing private key")]
    SignerKeyMismatch { index: usize },

    #[error("bytes are not a {0} point in uncompressed form")]
    InvalidPoint(Curve),

    #[error("private key is not a scalar in [1, N-1] on {0}")]
    InvalidPrivateKey(Curve),

    #[error("{curve} key must be {expected} bytes long, got {found}")]
    InvalidKeyLength {
        curve: Curve,
        expected: usize,
        found: usize,
    },

    /// The closing response came out as zero. Signing again with fresh randomness is fine.
    #[error("closing response reduced to zero, the signature would be degenerate")]
    DegenerateSignature,

    /// The random source failed. There is no safe fallback, so this is fatal.
    #[error("random source failure: {0}")]
    RandomSource(rand_core::Error),

    #[error("malformed key text: {0}")]
    Encoding(base64::DecodeError),
}

impl Error {
    /// Environment failures which retrying with the same inputs cannot fix.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::RandomSource(_))
    }
}
