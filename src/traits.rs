use crate::error::Result;
use digest::generic_array::typenum::U32;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};

pub trait Sign<PrivateKey, Ring>: Sized {
    fn sign<Hash: Digest<OutputSize = U32> + Clone + Default, CSPRNG: CryptoRng + RngCore>(
        csprng: &mut CSPRNG,
        k: PrivateKey,
        ring: Ring,
        secret_index: usize,
        message: &[u8],
    ) -> Result<Self>;
}

pub trait Verify {
    fn verify<Hash: Digest<OutputSize = U32> + Clone + Default>(
        signature: &Self,
        message: &[u8],
    ) -> bool;
}
