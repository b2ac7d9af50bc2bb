//! Standard base64 text form of key material, for callers that store or transport keys as text.
//!
//! Decoding a key checks it against the given curve, so a decoded key is always usable.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::prelude::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use elliptic_curve::zeroize::Zeroize;

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_bytes(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(Error::Encoding)
}

pub fn encode_public_key(key: &PublicKey) -> String {
    encode_bytes(key.as_bytes())
}

pub fn decode_public_key(curve: Curve, text: &str) -> Result<PublicKey> {
    PublicKey::from_bytes(curve, &decode_bytes(text)?)
}

pub fn encode_private_key(key: &PrivateKey) -> String {
    encode_bytes(key.as_bytes())
}

pub fn decode_private_key(curve: Curve, text: &str) -> Result<PrivateKey> {
    let mut bytes = decode_bytes(text)?;
    let key = PrivateKey::from_bytes(curve, &bytes);
    bytes.zeroize();
    key
}
