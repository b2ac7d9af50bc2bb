use crate::prelude::*;

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::primitives::{
    chain_point, challenge_scalar, hash_challenge, marshal_point, sample_scalar,
    scalar_from_bytes, unmarshal_point, ChallengeHash,
};
use crate::traits::{Sign, Verify};
use digest::generic_array::typenum::U32;
use digest::{Digest, Output};
use elliptic_curve::ff::{Field, PrimeField};
use elliptic_curve::ops::MulByGenerator;
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, ProjectivePoint, Scalar};
use p256::NistP256;
use p384::NistP384;
use rand_core::{CryptoRng, OsRng, RngCore};
use subtle::ConstantTimeEq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spontaneous Anonymous Group (SAG) signatures
/// > This non-linkable ring signature that allows spontaneous groups
///
/// Nothing in here tells which ring member signed. All byte strings are untrusted, [`SAG::verify`]
/// checks them.
///
/// Please read tests at the bottom of the source code for this module for examples on how to use
/// it
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SAG {
    /// Curve of every ring member and every response
    pub curve: Curve,
    /// `e0`, the challenge that lands on ring member 0
    pub challenge: Vec<u8>,
    /// One fixed-width big-endian scalar per ring member. All of them are random except the one
    /// that closes the chain.
    pub responses: Vec<Vec<u8>>,
    /// Public keys in chain order
    pub ring: Vec<PublicKey>,
}

impl<'a> Sign<&'a PrivateKey, Vec<PublicKey>> for SAG {
    /// To sign you need `k` your private key, and `ring` which is the public keys of everyone
    /// including you, with your own key at `secret_index`. You are signing the `message`
    fn sign<Hash: Digest<OutputSize = U32> + Clone + Default, CSPRNG: CryptoRng + RngCore>(
        csprng: &mut CSPRNG,
        k: &'a PrivateKey,
        ring: Vec<PublicKey>,
        secret_index: usize,
        message: &[u8],
    ) -> Result<SAG> {
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }
        if secret_index >= ring.len() {
            return Err(Error::SignerIndexOutOfRange {
                index: secret_index,
                ring_size: ring.len(),
            });
        }
        if ring.len() < 2 {
            return Err(Error::RingTooSmall { size: ring.len() });
        }
        let curve = k.curve();
        if let Some((index, key)) = ring.iter().enumerate().find(|(_, key)| key.curve() != curve) {
            return Err(Error::CurveMismatch {
                index,
                expected: curve,
                found: key.curve(),
            });
        }

        let (challenge, responses) = match curve {
            Curve::P256 => {
                sign_chain::<NistP256, Hash, CSPRNG>(csprng, k, &ring, secret_index, message)?
            }
            Curve::P384 => {
                sign_chain::<NistP384, Hash, CSPRNG>(csprng, k, &ring, secret_index, message)?
            }
        };
        Ok(SAG {
            curve,
            challenge,
            responses,
            ring,
        })
    }
}

impl Verify for SAG {
    /// To verify a `signature` you need the `message` too
    fn verify<Hash: Digest<OutputSize = U32> + Clone + Default>(
        signature: &SAG,
        message: &[u8],
    ) -> bool {
        let n = signature.ring.len();
        if n < 2
            || signature.responses.len() != n
            || signature.challenge.len() != <Hash as Digest>::output_size()
            || signature.ring.iter().any(|key| key.curve() != signature.curve)
        {
            return false;
        }
        match signature.curve {
            Curve::P256 => verify_chain::<NistP256, Hash>(signature, message),
            Curve::P384 => verify_chain::<NistP384, Hash>(signature, message),
        }
    }
}

/// Signs with the operating system's random source and [`ChallengeHash`].
pub fn sign(
    message: &[u8],
    ring: Vec<PublicKey>,
    signer_index: usize,
    private_key: &PrivateKey,
) -> Result<SAG> {
    sign_with_rng(&mut OsRng, message, ring, signer_index, private_key)
}

/// Signs with [`ChallengeHash`], drawing the nonce and the fake responses from `csprng`.
pub fn sign_with_rng<CSPRNG: CryptoRng + RngCore>(
    csprng: &mut CSPRNG,
    message: &[u8],
    ring: Vec<PublicKey>,
    signer_index: usize,
    private_key: &PrivateKey,
) -> Result<SAG> {
    SAG::sign::<ChallengeHash, CSPRNG>(csprng, private_key, ring, signer_index, message)
}

/// Verifies with [`ChallengeHash`].
pub fn verify(signature: &SAG, message: &[u8]) -> bool {
    SAG::verify::<ChallengeHash>(signature, message)
}

fn sign_chain<C, Hash, CSPRNG>(
    csprng: &mut CSPRNG,
    k: &PrivateKey,
    ring: &[PublicKey],
    secret_index: usize,
    message: &[u8],
) -> Result<(Vec<u8>, Vec<Vec<u8>>)>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
    Hash: Digest<OutputSize = U32>,
    CSPRNG: CryptoRng + RngCore,
{
    let n = ring.len();
    let k: Scalar<C> =
        scalar_from_bytes::<C>(k.as_bytes()).ok_or(Error::InvalidPrivateKey(k.curve()))?;
    let ring: Vec<ProjectivePoint<C>> = ring
        .iter()
        .enumerate()
        .map(|(index, key)| {
            unmarshal_point::<C>(key.as_bytes()).ok_or(Error::InvalidPublicKey { index })
        })
        .collect::<Result<_>>()?;
    if ring[secret_index] != ProjectivePoint::<C>::mul_by_generator(&k) {
        return Err(Error::SignerKeyMismatch {
            index: secret_index,
        });
    }

    let a: Scalar<C> = sample_scalar::<C, CSPRNG>(csprng)?;
    let mut rs: Vec<Scalar<C>> = vec![Scalar::<C>::ZERO; n];
    let mut cs: Vec<Output<Hash>> = vec![Output::<Hash>::default(); n];

    cs[(secret_index + 1) % n] = hash_challenge::<Hash>(
        message,
        marshal_point::<C>(&ProjectivePoint::<C>::mul_by_generator(&a)).as_bytes(),
    );

    // Every member but the signer gets a random response, walking the ring from the signer's
    // successor and wrapping around.
    let mut i = (secret_index + 1) % n;
    while i != secret_index {
        rs[i] = sample_scalar::<C, CSPRNG>(csprng)?;
        let point = chain_point::<C>(&rs[i], &challenge_scalar::<C>(&cs[i]), &ring[i]);
        cs[(i + 1) % n] = hash_challenge::<Hash>(message, marshal_point::<C>(&point).as_bytes());
        i = (i + 1) % n;
    }

    rs[secret_index] = a - challenge_scalar::<C>(&cs[secret_index]) * k;
    if bool::from(rs[secret_index].is_zero()) {
        return Err(Error::DegenerateSignature);
    }

    Ok((
        cs[0].to_vec(),
        rs.iter().map(|r| r.to_repr().to_vec()).collect(),
    ))
}

fn verify_chain<C, Hash>(signature: &SAG, message: &[u8]) -> bool
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
    Hash: Digest<OutputSize = U32>,
{
    let mut reconstructed_c: Output<Hash> = Output::<Hash>::default();
    reconstructed_c.copy_from_slice(&signature.challenge);
    for (key, response) in signature.ring.iter().zip(&signature.responses) {
        let (k_point, r) = match (
            unmarshal_point::<C>(key.as_bytes()),
            scalar_from_bytes::<C>(response),
        ) {
            (Some(k_point), Some(r)) => (k_point, r),
            _ => return false,
        };
        let point = chain_point::<C>(&r, &challenge_scalar::<C>(&reconstructed_c), &k_point);
        reconstructed_c = hash_challenge::<Hash>(message, marshal_point::<C>(&point).as_bytes());
    }

    bool::from(signature.challenge[..].ct_eq(&reconstructed_c[..]))
}
