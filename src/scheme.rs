//! Shared interface of the non-polynomial commitment schemes

use rand::{CryptoRng, RngCore};

use crate::Result;

/// A commit-then-reveal scheme. The concrete scheme is picked by the caller
/// when it is set up, everything afterwards goes through this trait.
///
/// # Example
/// ```
/// use kzg_playground::{hash::HashCommitter, pedersen::PedersenCommitter, CommitmentScheme, Scalar};
///
/// fn roundtrip<S: CommitmentScheme>(message: &S::Message) -> bool {
///     let mut rng = rand::thread_rng();
///     let scheme = S::setup(&mut rng).unwrap();
///     let blinding = scheme.blinding(&mut rng).unwrap();
///     let c = scheme.commit(message, &blinding);
///     scheme.verify(message, &blinding, &c)
/// }
///
/// assert!(roundtrip::<HashCommitter>(&b"hello world"[..]));
/// assert!(roundtrip::<PedersenCommitter>(&Scalar::from(42)));
/// ```
pub trait CommitmentScheme: Sized {
    type Message: ?Sized;
    type Blinding;
    type Commitment: PartialEq;

    /// Creates the public parameters of the scheme
    fn setup<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self>;

    /// Samples fresh hiding randomness for one commitment
    fn blinding<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Self::Blinding>;

    fn commit(&self, message: &Self::Message, blinding: &Self::Blinding) -> Self::Commitment;

    /// Recomputes the commitment from the revealed values and compares it with `commitment`
    fn verify(
        &self,
        message: &Self::Message,
        blinding: &Self::Blinding,
        commitment: &Self::Commitment,
    ) -> bool {
        self.commit(message, blinding) == *commitment
    }
}
