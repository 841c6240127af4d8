//! Helpers over the BLS12-381 scalar field `r`.
//!
//! `bls12_381::Scalar` already keeps every value reduced into `[0, r)`, so the
//! group operations (`+`, `-`, `*`, unary `-`) are used directly. This module
//! adds the pieces the commitment schemes need on top of that: fallible
//! division, binary exponentiation, a canonical big-endian encoding and
//! uniform sampling from a cryptographically secure source.

use rand::{CryptoRng, RngCore};
use zeroize::DefaultIsZeroes;

use crate::{Error, Result, Scalar};

/// Width of a canonical scalar encoding, `ceil(bitlength(r) / 8)`
pub const SCALAR_BYTES: usize = 32;

/// r - 2, little endian limbs
const MODULUS_MINUS_TWO: [u64; 4] = [
    0xffff_fffe_ffff_ffff,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// A secret scalar, meant to be held in a `zeroize::Zeroizing` so it is wiped on drop
#[derive(Clone, Copy, Default)]
pub(crate) struct Secret(pub Scalar);

impl DefaultIsZeroes for Secret {}

pub trait FieldExt: Sized {
    /// Square-and-multiply exponentiation, `exponent` given as little endian limbs
    fn exp(&self, exponent: &[u64]) -> Self;

    fn exp_u64(&self, exponent: u64) -> Self {
        self.exp(&[exponent])
    }

    /// Multiplicative inverse through Fermat's little theorem, `self^(r-2)`
    fn inverse(&self) -> Result<Self>;

    fn checked_div(&self, rhs: &Self) -> Result<Self>;

    fn to_be_bytes(&self) -> [u8; SCALAR_BYTES];

    /// Parses a big-endian encoding, rejecting values that are not reduced modulo `r`
    fn from_be_bytes(bytes: &[u8; SCALAR_BYTES]) -> Result<Self>;

    /// Samples a uniform scalar. A failing source is reported, never retried.
    fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self>;
}

impl FieldExt for Scalar {
    fn exp(&self, exponent: &[u64]) -> Self {
        let mut acc = Scalar::one();
        let mut base = *self;
        for limb in exponent {
            let mut bits = *limb;
            for _ in 0..u64::BITS {
                if bits & 1 == 1 {
                    acc *= base;
                }
                base = base.square();
                bits >>= 1;
            }
        }
        acc
    }

    fn inverse(&self) -> Result<Self> {
        if self == &Scalar::zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.exp(&MODULUS_MINUS_TWO))
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs.inverse()?)
    }

    fn to_be_bytes(&self) -> [u8; SCALAR_BYTES] {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }

    fn from_be_bytes(bytes: &[u8; SCALAR_BYTES]) -> Result<Self> {
        let mut le = *bytes;
        le.reverse();
        Option::from(Scalar::from_bytes(&le))
            .ok_or(Error::InvalidEncoding("scalar is not canonical"))
    }

    fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        // 512 bits reduced modulo r, the bias is negligible
        let mut wide = [0u8; 64];
        rng.try_fill_bytes(&mut wide)?;
        let scalar = Scalar::from_bytes_wide(&wide);
        wide.fill(0);
        Ok(scalar)
    }
}

/// An entropy source that always fails
#[cfg(test)]
pub(crate) struct ExhaustedRng;

#[cfg(test)]
impl RngCore for ExhaustedRng {
    fn next_u32(&mut self) -> u32 {
        unimplemented!()
    }
    fn next_u64(&mut self) -> u64 {
        unimplemented!()
    }
    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unimplemented!()
    }
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        Err(rand::Error::new("entropy exhausted"))
    }
}

#[cfg(test)]
impl CryptoRng for ExhaustedRng {}
