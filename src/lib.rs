//! Polynomial commitments over BLS12-381.
//!
//! A trusted setup ([`Srs`]) commits to polynomials ([`Poly`]) and opens them
//! at one or many points with constant size [`Proof`]s. The [`hash`] and
//! [`pedersen`] modules carry two simpler value commitments behind the
//! [`CommitmentScheme`] trait.
//!
//! ```
//! use kzg_playground::{Poly, Scalar, SetupParams, Srs};
//!
//! let srs = Srs::generate_with(&SetupParams::new(8), &mut rand::thread_rng()).unwrap();
//! let p = Poly::from_u64(&[5, 1, 0, 1]);
//! let c = srs.commit(&p).unwrap();
//! let (y, proof) = srs.open(&p, &Scalar::from(3)).unwrap();
//! assert!(srs.verify(&c, &proof, &Scalar::from(3), &y).unwrap());
//! ```

mod error;
pub mod field;
pub mod hash;
pub mod kzg;
pub mod pedersen;
mod poly;
mod scheme;
pub mod setup;

pub use error::{Error, Result};
pub use field::FieldExt;
pub use kzg::{Commitment, Proof};
pub use poly::Poly;
pub use scheme::CommitmentScheme;
pub use setup::{SetupParams, Srs};

pub use bls12_381;

pub type Scalar = bls12_381::Scalar;
