use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::prelude::*;
use crate::primitives::{marshal_point, sample_scalar, scalar_from_bytes, unmarshal_point};
use core::fmt;
use elliptic_curve::ff::{Field, PrimeField};
use elliptic_curve::ops::MulByGenerator;
use elliptic_curve::sec1::{ModulusSize, ToEncodedPoint};
use elliptic_curve::zeroize::Zeroize;
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, ProjectivePoint};
use p256::NistP256;
use p384::NistP384;
use rand_core::{CryptoRng, OsRng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ring member: an uncompressed SEC1 point `0x04 ‖ X ‖ Y` on `curve`.
///
/// Deserialising goes through [`PublicKey::from_bytes`], so every `PublicKey` holds a valid point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPublicKey"))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    curve: Curve,
    bytes: Vec<u8>,
}

/// Wire shape of [`PublicKey`] before validation
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPublicKey {
    curve: Curve,
    bytes: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPublicKey> for PublicKey {
    type Error = Error;

    fn try_from(raw: RawPublicKey) -> Result<Self> {
        PublicKey::from_bytes(raw.curve, &raw.bytes)
    }
}

impl PublicKey {
    /// Checks that `bytes` is an uncompressed point on `curve`.
    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.public_key_len() {
            return Err(Error::InvalidKeyLength {
                curve,
                expected: curve.public_key_len(),
                found: bytes.len(),
            });
        }
        let on_curve = match curve {
            Curve::P256 => unmarshal_point::<NistP256>(bytes).is_some(),
            Curve::P384 => unmarshal_point::<NistP384>(bytes).is_some(),
        };
        if !on_curve {
            return Err(Error::InvalidPoint(curve));
        }
        Ok(PublicKey {
            curve,
            bytes: bytes.to_vec(),
        })
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Skips validation, for exercising the checks in signing and verification.
    #[cfg(test)]
    pub(crate) fn unchecked(curve: Curve, bytes: Vec<u8>) -> Self {
        PublicKey { curve, bytes }
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// A big-endian scalar in `[1, N-1]`. The bytes are wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    curve: Curve,
    bytes: Vec<u8>,
}

impl PrivateKey {
    /// Checks that `bytes` is a fixed-width scalar in `[1, N-1]` on `curve`.
    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.private_key_len() {
            return Err(Error::InvalidKeyLength {
                curve,
                expected: curve.private_key_len(),
                found: bytes.len(),
            });
        }
        let in_range = match curve {
            Curve::P256 => nonzero_scalar::<NistP256>(bytes),
            Curve::P384 => nonzero_scalar::<NistP384>(bytes),
        };
        if !in_range {
            return Err(Error::InvalidPrivateKey(curve));
        }
        Ok(PrivateKey {
            curve,
            bytes: bytes.to_vec(),
        })
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `k·G`
    pub fn public_key(&self) -> Result<PublicKey> {
        let bytes = match self.curve {
            Curve::P256 => public_point::<NistP256>(&self.bytes),
            Curve::P384 => public_point::<NistP384>(&self.bytes),
        }
        .ok_or(Error::InvalidPrivateKey(self.curve))?;
        Ok(PublicKey {
            curve: self.curve,
            bytes,
        })
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Generates a key pair on `curve` from the operating system's random source.
pub fn generate_key_pair(curve: Curve) -> Result<(PublicKey, PrivateKey)> {
    generate_key_pair_with_rng(&mut OsRng, curve)
}

/// Generates a key pair on `curve` from `csprng`.
///
/// The only failure is the random source itself failing, reported as the fatal
/// [`Error::RandomSource`]. No partial key is ever returned.
pub fn generate_key_pair_with_rng<CSPRNG>(
    csprng: &mut CSPRNG,
    curve: Curve,
) -> Result<(PublicKey, PrivateKey)>
where
    CSPRNG: CryptoRng + RngCore + ?Sized,
{
    let (public, private) = match curve {
        Curve::P256 => key_pair_on::<NistP256, CSPRNG>(csprng)?,
        Curve::P384 => key_pair_on::<NistP384, CSPRNG>(csprng)?,
    };
    Ok((
        PublicKey {
            curve,
            bytes: public,
        },
        PrivateKey {
            curve,
            bytes: private,
        },
    ))
}

fn key_pair_on<C, CSPRNG>(csprng: &mut CSPRNG) -> Result<(Vec<u8>, Vec<u8>)>
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
    CSPRNG: CryptoRng + RngCore + ?Sized,
{
    let k = sample_scalar::<C, CSPRNG>(csprng)?;
    let k_point = ProjectivePoint::<C>::mul_by_generator(&k);
    Ok((
        marshal_point::<C>(&k_point).as_bytes().to_vec(),
        k.to_repr().to_vec(),
    ))
}

fn nonzero_scalar<C: CurveArithmetic>(bytes: &[u8]) -> bool {
    scalar_from_bytes::<C>(bytes).map_or(false, |k| !bool::from(k.is_zero()))
}

fn public_point<C>(bytes: &[u8]) -> Option<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let k = scalar_from_bytes::<C>(bytes)?;
    let k_point = ProjectivePoint::<C>::mul_by_generator(&k);
    Some(marshal_point::<C>(&k_point).as_bytes().to_vec())
}
