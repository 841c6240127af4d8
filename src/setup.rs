//! Structured reference string (powers of tau) generation and encoding

use std::time::Instant;

use bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective};
use rand::{CryptoRng, RngCore};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::{
    field::{FieldExt, Secret},
    Error, Poly, Result, Scalar,
};

pub const G1_BYTES: usize = 48;
pub const G2_BYTES: usize = 96;
const LEN_PREFIX_BYTES: usize = 8;

/// Parameters of a trusted setup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupParams {
    /// Number of powers of tau computed in each group
    pub size: usize,
    /// Worker threads for the power computation, `None` uses the global pool
    #[serde(default)]
    pub threads: Option<usize>,
}

impl SetupParams {
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            threads: None,
        }
    }

    pub const fn with_threads(self, threads: usize) -> Self {
        Self {
            threads: Some(threads),
            ..self
        }
    }
}

/// Powers of a secret `tau` in G1 and G2, `[tau^i]_1` and `[tau^i]_2` for `i` in `0..n`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Srs {
    tau1: Vec<G1Affine>,
    tau2: Vec<G2Affine>,
}

impl Srs {
    /// Generate the trusted setup. Is expected that this function is called
    /// in a safe evironment what will be destroyed after its execution
    /// # Example
    /// ```
    /// use kzg_playground::Srs;
    ///
    /// let srs = Srs::generate(4, &mut rand::thread_rng()).unwrap();
    /// assert_eq!(srs.g1_powers().len(), 4);
    /// assert_eq!(srs.g2_powers().len(), 4);
    /// ```
    pub fn generate<R: RngCore + CryptoRng>(size: usize, rng: &mut R) -> Result<Self> {
        Self::generate_with(&SetupParams::new(size), rng)
    }

    pub fn generate_with<R: RngCore + CryptoRng>(
        params: &SetupParams,
        rng: &mut R,
    ) -> Result<Self> {
        let tau = Zeroizing::new(Secret(Scalar::sample(rng)?));
        debug!(size = params.size, threads = ?params.threads, "generating trusted setup");
        let start = Instant::now();

        let (tau1, tau2) = match params.threads {
            #[cfg(feature = "parallel")]
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(|| powers_of_tau(&tau, params.size)),
                Err(err) => {
                    tracing::warn!(%err, "cannot build setup thread pool, using the global one");
                    powers_of_tau(&tau, params.size)
                }
            },
            _ => powers_of_tau(&tau, params.size),
        };

        trace!(elapsed = ?start.elapsed(), "trusted setup generated");
        Ok(Self { tau1, tau2 })
    }

    /// Builds the setup from powers computed elsewhere, e.g. by a ceremony
    pub fn from_powers(tau1: Vec<G1Affine>, tau2: Vec<G2Affine>) -> Result<Self> {
        if tau1.len() != tau2.len() {
            return Err(Error::LengthMismatch {
                left: tau1.len(),
                right: tau2.len(),
            });
        }
        Ok(Self { tau1, tau2 })
    }

    pub fn len(&self) -> usize {
        self.tau1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tau1.is_empty()
    }

    pub fn g1_powers(&self) -> &[G1Affine] {
        &self.tau1
    }

    pub fn g2_powers(&self) -> &[G2Affine] {
        &self.tau2
    }

    pub(crate) fn ensure_supported(&self, coefficients: usize) -> Result<()> {
        if coefficients > self.len() {
            Err(Error::DegreeTooLarge {
                coefficients,
                max: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Evaluates `poly` at tau in G1, `[poly(tau)]_1`
    pub fn eval_g1(&self, poly: &Poly) -> Result<G1Projective> {
        let coeffs = poly.coeffs();
        self.ensure_supported(coeffs.len())?;

        #[cfg(feature = "parallel")]
        let eval = coeffs
            .par_iter()
            .zip(self.tau1.par_iter())
            .map(|(k, tau)| tau * k)
            .reduce(G1Projective::identity, |acc, v| acc + v);
        #[cfg(not(feature = "parallel"))]
        let eval = coeffs
            .iter()
            .zip(self.tau1.iter())
            .fold(G1Projective::identity(), |acc, (k, tau)| acc + tau * k);

        Ok(eval)
    }

    /// Evaluates `poly` at tau in G2, `[poly(tau)]_2`
    pub fn eval_g2(&self, poly: &Poly) -> Result<G2Projective> {
        let coeffs = poly.coeffs();
        self.ensure_supported(coeffs.len())?;
        Ok(coeffs
            .iter()
            .zip(self.tau2.iter())
            .fold(G2Projective::identity(), |acc, (k, tau)| acc + tau * k))
    }

    /// `n` as 8 bytes big-endian, then `n` compressed G1 points and `n` compressed G2 points
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(LEN_PREFIX_BYTES + self.len() * (G1_BYTES + G2_BYTES));
        bytes.extend_from_slice(&(self.len() as u64).to_be_bytes());
        for p in &self.tau1 {
            bytes.extend_from_slice(&p.to_compressed());
        }
        for p in &self.tau2 {
            bytes.extend_from_slice(&p.to_compressed());
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < LEN_PREFIX_BYTES {
            return Err(Error::InvalidEncoding("missing setup length prefix"));
        }
        let (prefix, points) = bytes.split_at(LEN_PREFIX_BYTES);
        let mut len = [0u8; LEN_PREFIX_BYTES];
        len.copy_from_slice(prefix);
        let n = usize::try_from(u64::from_be_bytes(len))
            .map_err(|_| Error::InvalidEncoding("setup length does not fit in memory"))?;
        let expected = n
            .checked_mul(G1_BYTES + G2_BYTES)
            .ok_or(Error::InvalidEncoding("setup length does not fit in memory"))?;
        if points.len() != expected {
            return Err(Error::InvalidEncoding("setup length does not match its prefix"));
        }

        let (g1, g2) = points.split_at(n * G1_BYTES);
        let tau1 = g1
            .chunks_exact(G1_BYTES)
            .map(g1_from_bytes)
            .collect::<Result<Vec<_>>>()?;
        let tau2 = g2
            .chunks_exact(G2_BYTES)
            .map(g2_from_bytes)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tau1, tau2 })
    }
}

fn powers_of_tau(tau: &Secret, size: usize) -> (Vec<G1Affine>, Vec<G2Affine>) {
    let power = |i: usize| {
        let pow = Zeroizing::new(Secret(tau.0.exp_u64(i as u64)));
        (
            G1Affine::from(G1Affine::generator() * pow.0),
            G2Affine::from(G2Affine::generator() * pow.0),
        )
    };

    #[cfg(feature = "parallel")]
    let powers: Vec<_> = (0..size).into_par_iter().map(power).collect();
    #[cfg(not(feature = "parallel"))]
    let powers: Vec<_> = (0..size).map(power).collect();

    powers.into_iter().unzip()
}

pub(crate) fn g1_from_bytes(bytes: &[u8]) -> Result<G1Affine> {
    let bytes: &[u8; G1_BYTES] = bytes
        .try_into()
        .map_err(|_| Error::InvalidEncoding("G1 point must be 48 bytes"))?;
    Option::from(G1Affine::from_compressed(bytes)).ok_or(Error::InvalidEncoding("invalid G1 point"))
}

pub(crate) fn g2_from_bytes(bytes: &[u8]) -> Result<G2Affine> {
    let bytes: &[u8; G2_BYTES] = bytes
        .try_into()
        .map_err(|_| Error::InvalidEncoding("G2 point must be 96 bytes"))?;
    Option::from(G2Affine::from_compressed(bytes)).ok_or(Error::InvalidEncoding("invalid G2 point"))
}
