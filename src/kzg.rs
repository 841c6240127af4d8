//! this module contains an implementation of Kate-Zaverucha-Goldberg polynomial commitments

use bls12_381::{
    multi_miller_loop, pairing, G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective,
};
use once_cell::sync::Lazy;
use tracing::{debug, trace, warn};

use crate::{
    setup::{g1_from_bytes, G1_BYTES},
    Error, Poly, Result, Scalar, Srs,
};

static G2_PREPARED: Lazy<G2Prepared> = Lazy::new(|| G2Prepared::from(G2Affine::generator()));

/// Binding digest of a polynomial, `[p(tau)]_1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment(pub G1Affine);

/// Witness of one or many evaluations, `[q(tau)]_1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof(pub G1Affine);

macro_rules! impl_g1_encoding {
    ($t:ident) => {
        impl $t {
            pub fn to_bytes(&self) -> [u8; G1_BYTES] {
                self.0.to_compressed()
            }

            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                g1_from_bytes(bytes).map($t)
            }
        }

        impl From<G1Projective> for $t {
            fn from(p: G1Projective) -> Self {
                $t(p.into())
            }
        }
    };
}

impl_g1_encoding!(Commitment);
impl_g1_encoding!(Proof);

/// Checks `e(proof, rhs) == e(lhs, [1]_2)`
fn pairing_check(proof: &G1Affine, rhs: &G2Affine, lhs: &G1Affine) -> bool {
    let e1 = pairing(proof, rhs);
    let e2 = multi_miller_loop(&[(lhs, &G2_PREPARED)]).final_exponentiation();
    let ok = e1 == e2;
    if !ok {
        debug!("pairing check failed");
    }
    ok
}

/// Divides `n` by `d`, failing if the division leaves a remainder
fn exact_div(n: &Poly, d: &Poly) -> Result<Poly<'static>> {
    let (q, r) = n.div_rem(d)?;
    if !r.is_zero() {
        warn!(remainder = %r, "claimed evaluations are not consistent with the polynomial");
        return Err(Error::EvaluationMismatch {
            remainder: r.to_string(),
        });
    }
    Ok(q)
}

impl Srs {
    /// Commits to `poly`. Fails if it has more coefficients than the setup has powers.
    pub fn commit(&self, poly: &Poly) -> Result<Commitment> {
        trace!(coefficients = poly.len(), "committing polynomial");
        self.eval_g1(poly).map(Commitment::from)
    }

    /// Interpolates a polynomial through `set` and commits to it
    pub fn commit_from_set(&self, set: &[(Scalar, Scalar)]) -> Result<(Poly<'static>, Commitment)> {
        let poly = Poly::lagrange(set)?;
        let commitment = self.commit(&poly)?;
        Ok((poly, commitment))
    }

    /// Evaluates `poly` at `z` and proves the evaluation
    /// # Example
    /// ```
    /// use kzg_playground::{Poly, Scalar, Srs};
    ///
    /// // p(x) = x^3 + x + 5
    /// let p = Poly::from_u64(&[5, 1, 0, 1]);
    /// let srs = Srs::generate(p.len(), &mut rand::thread_rng()).unwrap();
    /// let c = srs.commit(&p).unwrap();
    ///
    /// let (y, proof) = srs.open(&p, &Scalar::from(3)).unwrap();
    /// assert_eq!(y, Scalar::from(35));
    /// assert!(srs.verify(&c, &proof, &Scalar::from(3), &y).unwrap());
    /// assert!(!srs.verify(&c, &proof, &Scalar::from(4), &y).unwrap());
    /// ```
    pub fn open(&self, poly: &Poly, z: &Scalar) -> Result<(Scalar, Proof)> {
        let y = poly.eval(z);
        let proof = self.prove_evaluation(poly, z, &y)?;
        Ok((y, proof))
    }

    /// Proves that `poly(z) = y`, failing with [`Error::EvaluationMismatch`] otherwise
    pub fn prove_evaluation(&self, poly: &Poly, z: &Scalar, y: &Scalar) -> Result<Proof> {
        self.ensure_supported(poly.len())?;

        // n(x) = p(x) - y, d(x) = x - z
        let n = poly - &Poly::new(vec![*y]);
        let d = Poly::new(vec![-z, Scalar::one()]);
        let q = exact_div(&n, &d)?;

        // the proof is evaluating the Q at tau in G1
        self.eval_g1(&q).map(Proof::from)
    }

    /// Verifies that the polynomial behind `commitment` evaluates to `y` at `z`.
    ///
    /// A wrong proof is `Ok(false)`, errors are reserved for a setup too small to verify with.
    pub fn verify(
        &self,
        commitment: &Commitment,
        proof: &Proof,
        z: &Scalar,
        y: &Scalar,
    ) -> Result<bool> {
        let tau_g2 = self.g2_powers().get(1).ok_or(Error::DegreeTooLarge {
            coefficients: 2,
            max: self.len(),
        })?;

        // [tau]_2 - [z]_2
        let sz = G2Projective::from(tau_g2) - G2Affine::generator() * z;
        // c - [y]_1
        let cy = G1Projective::from(commitment.0) - G1Affine::generator() * y;

        Ok(pairing_check(&proof.0, &sz.into(), &cy.into()))
    }

    /// Proves the evaluations `p(zs[i]) = ys[i]` with a single proof
    /// # Example
    /// ```
    /// use kzg_playground::{Poly, Scalar, Srs};
    ///
    /// // p(x) = 10x^4 + x^3 + x + 5
    /// let p = Poly::from_u64(&[5, 1, 0, 1, 10]);
    /// let srs = Srs::generate(p.len(), &mut rand::thread_rng()).unwrap();
    /// let c = srs.commit(&p).unwrap();
    ///
    /// let zs = [Scalar::from(3), Scalar::from(10), Scalar::from(256)];
    /// let ys: Vec<_> = zs.iter().map(|z| p.eval(z)).collect();
    /// let proof = srs.open_batch(&p, &zs, &ys).unwrap();
    /// assert!(srs.verify_batch(&c, &proof, &zs, &ys).unwrap());
    ///
    /// // other points are not covered by the proof
    /// let zs = [Scalar::from(3), Scalar::from(10), Scalar::from(2500)];
    /// let ys: Vec<_> = zs.iter().map(|z| p.eval(z)).collect();
    /// assert!(!srs.verify_batch(&c, &proof, &zs, &ys).unwrap());
    /// ```
    #[allow(non_snake_case)]
    pub fn open_batch(&self, poly: &Poly, zs: &[Scalar], ys: &[Scalar]) -> Result<Proof> {
        if zs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                left: zs.len(),
                right: ys.len(),
            });
        }
        if poly.len() <= zs.len() + 1 {
            return Err(Error::DegreeTooSmall {
                coefficients: poly.len(),
                points: zs.len(),
            });
        }
        self.ensure_supported(poly.len())?;

        // Z(x) = (x-z0)(x-z1)...(x-zn) vanishes at every point
        // I(x) passes through every (zi, yi)
        let Z = Poly::vanishing(zs);
        let I = Poly::interpolate(zs, ys)?;

        // Q(x) = (P(x) - I(x)) / Z(x), with no remainder
        let Q = exact_div(&(poly - &I), &Z)?;
        self.eval_g1(&Q).map(Proof::from)
    }

    /// Verifies that the polynomial behind `commitment` evaluates to `ys[i]` at every `zs[i]`.
    /// The order of the pairs does not matter.
    #[allow(non_snake_case)]
    pub fn verify_batch(
        &self,
        commitment: &Commitment,
        proof: &Proof,
        zs: &[Scalar],
        ys: &[Scalar],
    ) -> Result<bool> {
        let I = Poly::interpolate(zs, ys)?;
        let Z = Poly::vanishing(zs);

        // [Z(tau)]_2
        let z = self.eval_g2(&Z)?;
        // c - [I(tau)]_1
        let ci = G1Projective::from(commitment.0) - self.eval_g1(&I)?;

        Ok(pairing_check(&proof.0, &z.into(), &ci.into()))
    }
}
