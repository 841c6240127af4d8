//! Pedersen commitments over G1, `m*G + r*H`
//!
//! `G` and `H` are the generator scaled by two random scalars that are wiped
//! right after the setup, so nobody knows the discrete log of `H` to base `G`.

use bls12_381::G1Affine;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    field::{FieldExt, Secret},
    setup::{g1_from_bytes, G1_BYTES},
    CommitmentScheme, Error, Result, Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PedersenCommitter {
    g: G1Affine,
    h: G1Affine,
}

impl PedersenCommitter {
    /// Builds a committer from known generators
    pub fn from_generators(g: G1Affine, h: G1Affine) -> Self {
        Self { g, h }
    }

    pub fn generators(&self) -> (&G1Affine, &G1Affine) {
        (&self.g, &self.h)
    }

    /// `G || H`, both compressed
    pub fn to_bytes(&self) -> [u8; 2 * G1_BYTES] {
        let mut bytes = [0u8; 2 * G1_BYTES];
        bytes[..G1_BYTES].copy_from_slice(&self.g.to_compressed());
        bytes[G1_BYTES..].copy_from_slice(&self.h.to_compressed());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 2 * G1_BYTES {
            return Err(Error::InvalidEncoding("Pedersen generators must be 96 bytes"));
        }
        let (g, h) = bytes.split_at(G1_BYTES);
        Ok(Self {
            g: g1_from_bytes(g)?,
            h: g1_from_bytes(h)?,
        })
    }
}

impl CommitmentScheme for PedersenCommitter {
    type Message = Scalar;
    type Blinding = Scalar;
    type Commitment = G1Affine;

    fn setup<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let a = Zeroizing::new(Secret(Scalar::sample(rng)?));
        let b = Zeroizing::new(Secret(Scalar::sample(rng)?));
        debug!("generated Pedersen generators");
        Ok(Self {
            g: (G1Affine::generator() * a.0).into(),
            h: (G1Affine::generator() * b.0).into(),
        })
    }

    fn blinding<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Self::Blinding> {
        Scalar::sample(rng)
    }

    fn commit(&self, message: &Scalar, blinding: &Scalar) -> G1Affine {
        (self.g * message + self.h * blinding).into()
    }
}
