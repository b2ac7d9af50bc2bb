//! Scalar sampling, hashing and point (de)serialisation shared by key generation, signing and
//! verification.
//!
//! Everything here is generic over a RustCrypto [`CurveArithmetic`] curve; the rest of the crate
//! picks the concrete curve from a [`crate::Curve`] value.

use crate::error::{Error, Result};
use digest::generic_array::typenum::U32;
use digest::{Digest, Output};
use elliptic_curve::ff::{Field, PrimeField};
use elliptic_curve::generic_array::typenum::Unsigned;
use elliptic_curve::ops::{MulByGenerator, Reduce};
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, Tag, ToEncodedPoint};
use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, ProjectivePoint, Scalar,
};
use rand_core::{CryptoRng, RngCore};

/// The hash the challenge chain is built with by [`crate::sign`] and [`crate::verify`].
pub type ChallengeHash = sha2::Sha256;

/// Draws a uniformly random scalar in `[1, N-1]`.
///
/// Candidates are read straight from the random source and rejected when they are zero or not
/// below the group order. For P-256 and P-384 a rejection practically never happens.
pub fn sample_scalar<C, CSPRNG>(csprng: &mut CSPRNG) -> Result<Scalar<C>>
where
    C: CurveArithmetic,
    CSPRNG: CryptoRng + RngCore + ?Sized,
{
    let mut repr = FieldBytes::<C>::default();
    loop {
        csprng.try_fill_bytes(&mut repr).map_err(Error::RandomSource)?;
        match scalar_from_bytes::<C>(&repr) {
            Some(scalar) if !bool::from(scalar.is_zero()) => return Ok(scalar),
            _ => continue,
        }
    }
}

/// `Hash(message ‖ point)`, with no domain separation.
pub fn hash_challenge<Hash>(message: &[u8], point: &[u8]) -> Output<Hash>
where
    Hash: Digest<OutputSize = U32>,
{
    Hash::new()
        .chain_update(message)
        .chain_update(point)
        .finalize()
}

/// Reads a challenge digest as a big-endian integer and reduces it mod N.
pub fn challenge_scalar<C: CurveArithmetic>(digest: &[u8]) -> Scalar<C> {
    let mut repr = FieldBytes::<C>::default();
    let width = repr.len().min(digest.len());
    let offset = repr.len() - width;
    repr[offset..].copy_from_slice(&digest[..width]);
    <Scalar<C> as Reduce<C::Uint>>::reduce_bytes(&repr)
}

/// Parses a fixed-width big-endian scalar. Values `>= N` are rejected, zero is accepted.
pub fn scalar_from_bytes<C: CurveArithmetic>(bytes: &[u8]) -> Option<Scalar<C>> {
    if bytes.len() != <FieldBytesSize<C> as Unsigned>::USIZE {
        return None;
    }
    let mut repr = FieldBytes::<C>::default();
    repr.copy_from_slice(bytes);
    Option::from(Scalar::<C>::from_repr(repr))
}

/// `s·G + e·Y`, one link of the challenge chain
pub fn chain_point<C: CurveArithmetic>(
    s: &Scalar<C>,
    e: &Scalar<C>,
    y: &ProjectivePoint<C>,
) -> ProjectivePoint<C> {
    ProjectivePoint::<C>::mul_by_generator(s) + *y * e
}

/// SEC1 uncompressed encoding, coordinates zero-padded to the field width
pub fn marshal_point<C>(point: &ProjectivePoint<C>) -> EncodedPoint<C>
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let affine: AffinePoint<C> = (*point).into();
    affine.to_encoded_point(false)
}

/// Inverse of [`marshal_point`]. Only uncompressed encodings of points on `C` are accepted.
pub fn unmarshal_point<C>(bytes: &[u8]) -> Option<ProjectivePoint<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = EncodedPoint::<C>::from_bytes(bytes).ok()?;
    if encoded.tag() != Tag::Uncompressed {
        return None;
    }
    let affine: Option<AffinePoint<C>> = AffinePoint::<C>::from_encoded_point(&encoded).into();
    affine.map(ProjectivePoint::<C>::from)
}
