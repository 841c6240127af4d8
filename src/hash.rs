//! Hash commitments, `SHA-256(value || r)`

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::{CommitmentScheme, Result};

pub const BLINDING_BYTES: usize = 32;
pub const DIGEST_BYTES: usize = 32;

/// Commits to arbitrary bytes. Has no public parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HashCommitter;

impl HashCommitter {
    /// Draws the 32 random bytes hiding a value
    pub fn randomness<R: RngCore + CryptoRng>(rng: &mut R) -> Result<[u8; BLINDING_BYTES]> {
        let mut r = [0u8; BLINDING_BYTES];
        rng.try_fill_bytes(&mut r)?;
        Ok(r)
    }
}

impl CommitmentScheme for HashCommitter {
    type Message = [u8];
    type Blinding = [u8; BLINDING_BYTES];
    type Commitment = [u8; DIGEST_BYTES];

    fn setup<R: RngCore + CryptoRng>(_rng: &mut R) -> Result<Self> {
        Ok(HashCommitter)
    }

    fn blinding<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Self::Blinding> {
        Self::randomness(rng)
    }

    fn commit(&self, message: &[u8], blinding: &Self::Blinding) -> Self::Commitment {
        trace!(bytes = message.len(), "hash commitment");
        Sha256::new()
            .chain_update(message)
            .chain_update(blinding)
            .finalize()
            .into()
    }
}
